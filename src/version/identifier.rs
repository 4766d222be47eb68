//! Version identifier parsing
//!
//! Catalog identifiers come in two shapes:
//! - Releases: dotted numeric sequences like `5.7.0.3`
//! - Branch tips: a configurable prefix plus a numeric branch stem, like
//!   `dev-5.7`, standing for the newest unreleased state of that branch

use crate::version::error::VersionError;

/// A parsed version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionId {
    /// Published release. Trailing zero components are trimmed at parse
    /// time so `5.6` and `5.6.0` are the same identifier.
    Release(Vec<u64>),
    /// Unreleased tip of a branch. The stem is kept verbatim: branch names
    /// are labels, and `dev-5.0` names a different branch than `dev-5`.
    DevBranch(Vec<u64>),
}

impl VersionId {
    /// Parse a catalog identifier.
    ///
    /// Releases must match `digit+('.'digit+)*`; branch tips the same
    /// grammar after `dev_prefix`. Anything else is malformed.
    pub fn parse(input: &str, dev_prefix: &str) -> Result<Self, VersionError> {
        if !dev_prefix.is_empty() {
            if let Some(stem) = input.strip_prefix(dev_prefix) {
                let stem =
                    parse_dotted(stem).ok_or_else(|| VersionError::Malformed(input.to_string()))?;
                return Ok(VersionId::DevBranch(stem));
            }
        }

        let mut components =
            parse_dotted(input).ok_or_else(|| VersionError::Malformed(input.to_string()))?;
        trim_trailing_zeros(&mut components);
        Ok(VersionId::Release(components))
    }
}

/// Extract the numeric components of a requested version string.
///
/// Best effort, never fails: leading digits of each dot-separated part are
/// taken until a part carries trailing text or no digits at all, so
/// `8.1rc1` yields `[8, 1]` and `rc1` yields nothing. Trailing zero
/// components are trimmed the same way release identifiers are.
pub fn parse_requested(input: &str) -> Vec<u64> {
    let mut components = Vec::new();
    for part in input.split('.') {
        let digits = part.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            break;
        }
        let Ok(value) = part[..digits].parse::<u64>() else {
            break;
        };
        components.push(value);
        if digits != part.len() {
            // trailing text ends the version
            break;
        }
    }
    trim_trailing_zeros(&mut components);
    components
}

/// Strict `digit+('.'digit+)*` parse.
fn parse_dotted(input: &str) -> Option<Vec<u64>> {
    if input.is_empty() {
        return None;
    }
    input
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u64>().ok()
        })
        .collect()
}

fn trim_trailing_zeros(components: &mut Vec<u64>) {
    while components.last() == Some(&0) {
        components.pop();
    }
}
