mod config;
mod error;
mod fetch;
mod patcher;

pub use config::{Category, SyncConfig};
pub use error::{Result, SyncError};
pub use fetch::GithubClient;
pub use patcher::{DescriptionUpdate, PatchReport, apply_descriptions};
