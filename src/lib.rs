//! Best-match selection of package versions against a catalog of known
//! releases and branch tips.
//!
//! Catalogs mix dotted numeric releases (`5.7.0.3`) with branch-tip
//! identifiers (`dev-5.7`) standing for the newest unreleased state of a
//! branch. [`version::matcher::match_best_version`] picks, for any
//! requested version string, the newest known identifier that does not
//! exceed the request; branch tips cover requests beyond the releases on
//! their branch, and requests older than the whole catalog fall back to
//! the oldest known version.
//!
//! ```
//! use version_matcher::config::DEFAULT_DEV_PREFIX;
//! use version_matcher::version::catalog::Catalog;
//! use version_matcher::version::matcher::match_best_version;
//!
//! let known = Catalog::new(["5.7.0", "5.7.0.3", "dev-5.7"], DEFAULT_DEV_PREFIX)?;
//! assert_eq!(match_best_version(&known, "5.7.0.3"), "5.7.0.3");
//! assert_eq!(match_best_version(&known, "5.7.1"), "dev-5.7");
//! # Ok::<(), version_matcher::version::error::CatalogError>(())
//! ```

pub mod config;
pub mod version;
