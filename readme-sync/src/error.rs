use thiserror::Error;

/// Result type alias for readme-sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors for configuration loading, description fetching and patching
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Regex error: {0}")]
    PatternError(#[from] regex::Error),
}
