use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Errors that can occur when promoting a changelog release
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read changelog file: {0}")]
    ReadError(std::io::Error),

    #[error("Failed to write changelog file: {0}")]
    WriteError(std::io::Error),

    #[error("No unreleased section found")]
    MissingUnreleasedSection,

    #[error("Version {0} already exists")]
    VersionAlreadyExists(String),

    #[error("Invalid release date: {0}")]
    InvalidDate(String),

    #[error("Regex error: {0}")]
    PatternError(#[from] regex::Error),
}

impl ChangelogError {
    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound(path) => format!("File not found: {}", path.display()),
            Self::ReadError(err) => format!("Failed to read changelog: {err}"),
            Self::WriteError(err) => format!("Failed to write changelog: {err}"),
            Self::MissingUnreleasedSection => {
                "No unreleased section found in changelog".to_string()
            }
            Self::VersionAlreadyExists(version) => {
                format!("Version {version} already exists in changelog")
            }
            Self::InvalidDate(date) => {
                format!("Invalid release date: {date} (expected YYYY-MM-DD)")
            }
            Self::PatternError(err) => format!("Regular expression error: {err}"),
        }
    }
}
