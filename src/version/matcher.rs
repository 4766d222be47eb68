//! Best-match selection over a catalog
//!
//! Identifiers are ordered by version precedence: releases by their numeric
//! components, a branch tip immediately above the newest release on its
//! branch and below the next numeric version. A request matches the
//! greatest identifier not newer than itself, so requests beyond the
//! releases on a branch land on that branch's tip, and requests below the
//! whole catalog land on the oldest known version.

use tracing::{debug, warn};

use crate::version::catalog::Catalog;
use crate::version::identifier::{VersionId, parse_requested};

/// One position in a precedence key.
///
/// `Tip` orders below every numeric component. Appended to a base release,
/// it keys a branch tip strictly above that release (longer key, same
/// prefix) yet below any strictly larger numeric version, i.e. the tip sits
/// immediately after the newest release on its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum KeyPart {
    Tip,
    Num(u64),
}

/// Pick the best-matching known identifier for a requested version.
///
/// Returns the verbatim catalog spelling of the greatest identifier whose
/// precedence does not exceed the request. A request older than the whole
/// catalog yields the oldest identifier; a request newer than everything
/// yields the newest, which with branch tips present is the tip of the
/// newest branch. An exact numeric match always wins over a branch tip.
pub fn match_best_version<'a>(catalog: &'a Catalog, requested: &str) -> &'a str {
    let components = parse_requested(requested);
    if components.is_empty() && !requested.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
        warn!(
            requested,
            "no numeric components in requested version, matching the oldest known version"
        );
    }
    let request_key = release_key(&components);

    let mut keyed = precedence_keys(catalog);
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let picked = keyed
        .iter()
        .rev()
        .find(|(key, _)| *key <= request_key)
        .or_else(|| keyed.first())
        .map(|(_, raw)| *raw)
        .expect("catalog is never empty");
    debug!(requested, matched = picked, "selected best matching version");
    picked
}

/// Newest identifier in the catalog under version precedence.
///
/// With a tip on the newest branch that tip is the latest, since a branch
/// tip is never older than the releases it prefixes.
pub fn resolve_latest(catalog: &Catalog) -> &str {
    precedence_keys(catalog)
        .into_iter()
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, raw)| raw)
        .expect("catalog is never empty")
}

/// All identifiers in ascending precedence order, verbatim spellings.
pub fn sort_by_precedence(catalog: &Catalog) -> Vec<&str> {
    let mut keyed = precedence_keys(catalog);
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, raw)| raw).collect()
}

fn precedence_keys<'a>(catalog: &'a Catalog) -> Vec<(Vec<KeyPart>, &'a str)> {
    let releases: Vec<&[u64]> = catalog
        .iter()
        .filter_map(|(id, _)| match id {
            VersionId::Release(components) => Some(components.as_slice()),
            VersionId::DevBranch(_) => None,
        })
        .collect();

    catalog
        .iter()
        .map(|(id, raw)| {
            let key = match id {
                VersionId::Release(components) => release_key(components),
                VersionId::DevBranch(stem) => branch_tip_key(stem, &releases),
            };
            (key, raw)
        })
        .collect()
}

fn release_key(components: &[u64]) -> Vec<KeyPart> {
    components.iter().copied().map(KeyPart::Num).collect()
}

/// Precedence key for a branch tip: the newest release sharing the stem
/// (the stem itself when the branch has no releases), a `Tip` marker, then
/// the stem as a tie-break between branches collapsing onto one release.
fn branch_tip_key(stem: &[u64], releases: &[&[u64]]) -> Vec<KeyPart> {
    let base = releases
        .iter()
        .copied()
        .filter(|release| shares_stem(stem, release))
        .max()
        .unwrap_or(stem);

    let mut key = release_key(base);
    key.push(KeyPart::Tip);
    key.extend(stem.iter().copied().map(KeyPart::Num));
    key
}

/// Whether `release` lies on branch `stem`, treating missing trailing
/// release components as zero.
fn shares_stem(stem: &[u64], release: &[u64]) -> bool {
    stem.iter()
        .enumerate()
        .all(|(i, &s)| release.get(i).copied().unwrap_or(0) == s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog(identifiers: &[&str]) -> Catalog {
        Catalog::new(identifiers.iter().copied(), "dev-").unwrap()
    }

    #[rstest]
    #[case(&[5, 6], &[5, 6], true)]
    #[case(&[5, 6], &[5, 6, 3, 1], true)]
    #[case(&[5, 6, 0], &[5, 6], true)] // missing release components are zero
    #[case(&[5, 6], &[5, 7], false)]
    #[case(&[5, 6], &[5], false)]
    #[case(&[8], &[8, 1], true)]
    fn shares_stem_returns_expected(
        #[case] stem: &[u64],
        #[case] release: &[u64],
        #[case] expected: bool,
    ) {
        assert_eq!(shares_stem(stem, release), expected);
    }

    #[test]
    fn branch_tip_keys_above_its_newest_release() {
        let releases: Vec<&[u64]> = vec![&[5, 6, 3], &[5, 6, 4], &[5, 7]];
        let key = branch_tip_key(&[5, 6], &releases);
        assert!(key > release_key(&[5, 6, 4]));
        assert!(key < release_key(&[5, 7]));
    }

    #[test]
    fn branch_tip_without_releases_keys_on_its_stem() {
        let key = branch_tip_key(&[5, 0], &[]);
        assert!(key > release_key(&[5]));
        assert!(key < release_key(&[5, 1]));
    }

    #[rstest]
    #[case("1.0.0", "1.0.0")] // exact match
    #[case("1.0.5", "1.0.0")] // greatest not newer than the request
    #[case("0.9", "1.0.0")] // floor
    #[case("3", "2.1.0")] // no tips, ceiling is the newest release
    fn match_best_version_over_releases_only(#[case] requested: &str, #[case] expected: &str) {
        let known = catalog(&["1.0.0", "1.1.0", "2.0.0", "2.1.0"]);
        assert_eq!(match_best_version(&known, requested), expected);
    }

    #[rstest]
    #[case("1.1.5", "dev-1.1")] // beyond the branch releases, tip wins
    #[case("1.1.0", "1.1.0")] // exact release wins over the tip
    #[case("1.2", "1.2.0")]
    #[case("9", "dev-1.2")] // ceiling is the newest branch tip
    fn match_best_version_with_branch_tips(#[case] requested: &str, #[case] expected: &str) {
        let known = catalog(&["1.1.0", "dev-1.1", "1.2.0", "dev-1.2"]);
        assert_eq!(match_best_version(&known, requested), expected);
    }

    #[test]
    fn branch_tip_covers_requests_past_an_empty_branch() {
        let known = catalog(&["dev-5.0"]);
        assert_eq!(match_best_version(&known, "5.1"), "dev-5.0");
        assert_eq!(match_best_version(&known, "4.9"), "dev-5.0");
    }

    #[rstest]
    #[case("")]
    #[case("rc1")]
    #[case("0")]
    fn digitless_requests_hit_the_floor(#[case] requested: &str) {
        let known = catalog(&["2.0.0", "1.0.0"]);
        assert_eq!(match_best_version(&known, requested), "1.0.0");
    }

    #[test]
    fn resolve_latest_prefers_the_newest_branch_tip() {
        let known = catalog(&["1.0.0", "dev-1", "0.9.0"]);
        assert_eq!(resolve_latest(&known), "dev-1");
    }

    #[test]
    fn resolve_latest_over_releases_only() {
        let known = catalog(&["1.0.0", "2.0.0", "1.5.0"]);
        assert_eq!(resolve_latest(&known), "2.0.0");
    }

    #[test]
    fn sort_by_precedence_interleaves_tips_with_releases() {
        let known = catalog(&["1.1.0", "dev-1.2", "dev-1.1", "1.0.0", "1.2.0"]);
        assert_eq!(
            sort_by_precedence(&known),
            vec!["1.0.0", "1.1.0", "dev-1.1", "1.2.0", "dev-1.2"]
        );
    }

    #[test]
    fn overlapping_branch_tips_order_by_stem() {
        let known = catalog(&["5.6.4", "dev-5.6", "dev-5.6.4"]);
        assert_eq!(
            sort_by_precedence(&known),
            vec!["5.6.4", "dev-5.6", "dev-5.6.4"]
        );
    }
}
