mod error;
mod parser;
mod types;

pub use error::{RepoListError, Result};
pub use parser::{MAX_ENTRIES, is_valid_version_label, parse};
pub use types::RepoVersionEntry;
