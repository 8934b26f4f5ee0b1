mod config;
mod error;
mod release;
mod utils;

pub use config::ChangelogConfig;
pub use error::{ChangelogError, Result};
pub use release::{ReleasePromotion, promote_unreleased, update_changelog_file};
