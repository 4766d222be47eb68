use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Malformed version identifier: {0:?}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No versions available in catalog")]
    NoVersionsAvailable,

    #[error("Invalid catalog entry: {0}")]
    InvalidIdentifier(#[from] VersionError),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
