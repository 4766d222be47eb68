//! Catalog of known version identifiers

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::version::error::CatalogError;
use crate::version::identifier::VersionId;

/// A validated, deduplicated set of known version identifiers.
///
/// Entries keep the exact spelling they were supplied with; matching hands
/// that spelling back verbatim. Supplying the same identifier twice keeps
/// the first spelling, so duplicates are a no-op.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: IndexMap<VersionId, String>,
}

impl Catalog {
    /// Build a catalog from identifier strings.
    ///
    /// Fails with [`CatalogError::NoVersionsAvailable`] when no identifiers
    /// are supplied and [`CatalogError::InvalidIdentifier`] on the first
    /// entry that parses as neither a release nor a `dev_prefix` branch tip.
    pub fn new<I, S>(identifiers: I, dev_prefix: &str) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = IndexMap::new();
        for raw in identifiers {
            let raw = raw.into();
            let id = VersionId::parse(&raw, dev_prefix)?;
            entries.entry(id).or_insert(raw);
        }
        if entries.is_empty() {
            return Err(CatalogError::NoVersionsAvailable);
        }
        Ok(Self { entries })
    }

    /// Parse catalog text: a JSON string array, or one identifier per line
    /// with blank lines skipped.
    pub fn from_text(text: &str, dev_prefix: &str) -> Result<Self, CatalogError> {
        if text.trim_start().starts_with('[') {
            let identifiers: Vec<String> = serde_json::from_str(text)?;
            return Self::new(identifiers, dev_prefix);
        }
        Self::new(
            text.lines().map(str::trim).filter(|line| !line.is_empty()),
            dev_prefix,
        )
    }

    /// Load a catalog file in either format accepted by [`Self::from_text`].
    pub fn load(path: &Path, dev_prefix: &str) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text, dev_prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // construction rejects empty supplies, kept for API completeness
        self.entries.is_empty()
    }

    /// Identifiers with their original spelling, in supply order.
    pub fn iter(&self) -> impl Iterator<Item = (&VersionId, &str)> {
        self.entries.iter().map(|(id, raw)| (id, raw.as_str()))
    }
}
