use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RepoListError, Result};
use crate::types::RepoVersionEntry;

/// Maximum number of repositories accepted in a single batch
pub const MAX_ENTRIES: usize = 10;

static ENTRY_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+)\s*=\s*(.+)$").expect("Failed to compile entry line regex")
});

static VERSION_LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-[A-Za-z0-9.]+)?$").expect("Failed to compile version label regex")
});

/// Returns true when `value` matches the version label grammar
/// (`X.Y.Z` with an optional `-suffix` of alphanumerics and dots).
#[must_use]
pub fn is_valid_version_label(value: &str) -> bool {
    VERSION_LABEL_PATTERN.is_match(value)
}

/// Parses multi-line `repo=version` text into an ordered entry list.
///
/// Blank lines and `#` comments are skipped; whitespace around names and
/// versions is trimmed. The parsed collection must be non-empty, free of
/// duplicate names and hold at most [`MAX_ENTRIES`] entries.
///
/// # Errors
///
/// Returns a `RepoListError` describing the first offending line, or the
/// violated collection invariant.
pub fn parse(input: &str) -> Result<Vec<RepoVersionEntry>> {
    let mut entries = Vec::new();

    for (index, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_number = index + 1;
        let captures =
            ENTRY_LINE_PATTERN
                .captures(line)
                .ok_or_else(|| RepoListError::LineFormat {
                    line: line_number,
                    content: line.to_string(),
                })?;

        let repo = captures[1].trim().to_string();
        let version = captures[2].trim().to_string();

        if !is_valid_version_label(&version) {
            return Err(RepoListError::VersionFormat {
                line: line_number,
                value: version,
            });
        }

        entries.push(RepoVersionEntry { repo, version });
    }

    if entries.is_empty() {
        return Err(RepoListError::EmptyInput);
    }

    let duplicates = duplicate_names(&entries);
    if !duplicates.is_empty() {
        return Err(RepoListError::DuplicateNames(duplicates));
    }

    if entries.len() > MAX_ENTRIES {
        return Err(RepoListError::TooManyEntries {
            count: entries.len(),
        });
    }

    Ok(entries)
}

fn duplicate_names(entries: &[RepoVersionEntry]) -> Vec<String> {
    let mut duplicates = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        if entries[..i].iter().any(|seen| seen.repo == entry.repo)
            && !duplicates.contains(&entry.repo)
        {
            duplicates.push(entry.repo.clone());
        }
    }

    duplicates
}
