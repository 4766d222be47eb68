use serde::Deserialize;

/// Default literal prefix marking a branch-tip identifier
pub const DEFAULT_DEV_PREFIX: &str = "dev-";

/// Matcher configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Literal prefix that marks a branch-tip identifier
    pub dev_prefix: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            dev_prefix: DEFAULT_DEV_PREFIX.to_string(),
        }
    }
}
