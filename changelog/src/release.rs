use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;

use crate::config::ChangelogConfig;
use crate::error::{ChangelogError, Result};
use crate::utils::{unreleased_heading_pattern, version_heading_pattern};

/// Outcome of a successful unreleased-section promotion
#[derive(Debug, Clone)]
pub struct ReleasePromotion {
    pub content: String,
    pub message: String,
}

/// Promotes the unreleased section of a changelog to a released version.
///
/// Replaces the first unreleased heading with `## [version] - date` and
/// inserts a fresh `## [Unreleased]` placeholder above it. The input text is
/// not modified on failure.
///
/// # Errors
///
/// Returns `MissingUnreleasedSection` if no unreleased heading exists and
/// `VersionAlreadyExists` if the version already has a heading.
pub fn promote_unreleased(
    content: &str,
    version: &str,
    date: &str,
    config: &ChangelogConfig,
) -> Result<ReleasePromotion> {
    let unreleased = unreleased_heading_pattern(&config.unreleased_labels)?;

    if !unreleased.is_match(content) {
        return Err(ChangelogError::MissingUnreleasedSection);
    }

    // Guard against double releases: reapplying the same version is an
    // error, not a silent duplicate heading.
    let existing = version_heading_pattern(version)?;
    if existing.is_match(content) {
        return Err(ChangelogError::VersionAlreadyExists(version.to_string()));
    }

    let heading = format!("## [{version}] - {date}");
    let replaced = unreleased
        .replacen(content, 1, regex::NoExpand(&heading))
        .into_owned();

    // The insertion point must be located in the already-mutated text so the
    // placeholder lands directly above the new version heading.
    let promoted = match replaced.find("\n## ") {
        Some(pos) => {
            let (before, after) = replaced.split_at(pos);
            format!("{before}\n\n## [Unreleased]\n{after}")
        }
        // No level-2 heading left to anchor on; keep the document usable by
        // placing the placeholder at the very top.
        None => format!("## [Unreleased]\n\n{replaced}"),
    };

    Ok(ReleasePromotion {
        content: promoted,
        message: format!("Unreleased -> [{version}] - {date}"),
    })
}

/// Reads a changelog file, promotes its unreleased section and writes the
/// result back as a whole-document replacement.
///
/// `date` defaults to today when `None`; an explicit date must match the
/// configured date format.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, the date is
/// invalid, the promotion fails, or the file cannot be written.
pub fn update_changelog_file(
    path: &Path,
    version: &str,
    date: Option<&str>,
    config: &ChangelogConfig,
) -> Result<String> {
    let date = match date {
        Some(given) => {
            NaiveDate::parse_from_str(given, &config.date_format)
                .map_err(|_| ChangelogError::InvalidDate(given.to_string()))?;
            given.to_string()
        }
        None => Local::now().format(&config.date_format).to_string(),
    };

    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(ChangelogError::ReadError)?;
    let promotion = promote_unreleased(&content, version, &date, config)?;
    fs::write(path, &promotion.content).map_err(ChangelogError::WriteError)?;

    Ok(promotion.message)
}
