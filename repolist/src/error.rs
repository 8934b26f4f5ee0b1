use thiserror::Error;

use crate::parser::MAX_ENTRIES;

/// Type alias for Result with `RepoListError`
pub type Result<T> = std::result::Result<T, RepoListError>;

/// Errors produced while parsing a repo=version batch
#[derive(Debug, Error)]
pub enum RepoListError {
    #[error("Line {line} is not in repo=version form: {content}")]
    LineFormat { line: usize, content: String },

    #[error(
        "Line {line} has an invalid version: {value} (expected X.Y.Z or X.Y.Z-suffix, e.g. 1.5.0 or 1.5.0-hotfix.1)"
    )]
    VersionFormat { line: usize, value: String },

    #[error("No repository entries found; provide at least one repo=version line")]
    EmptyInput,

    #[error("Duplicate repository names: {}", .0.join(", "))]
    DuplicateNames(Vec<String>),

    #[error("At most {max} repositories per batch, got {count}", max = MAX_ENTRIES)]
    TooManyEntries { count: usize },
}
