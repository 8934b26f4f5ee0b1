use changelog::{ChangelogConfig, update_changelog_file};
use std::path::Path;

use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(file: String, version: String, date: Option<String>) -> Result<()> {
    if !repolist::is_valid_version_label(&version) {
        return Err(CliError::Other(format!(
            "Invalid version: {version} (expected X.Y.Z or X.Y.Z-suffix)"
        )));
    }

    let config = ChangelogConfig::default();
    let message = update_changelog_file(Path::new(&file), &version, date.as_deref(), &config)?;

    ui::success_message(&message);
    Ok(())
}
