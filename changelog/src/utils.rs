use regex::Regex;

use crate::error::Result;

/// Builds the heading matcher for the configured unreleased labels.
/// Brackets around the label are optional and matching is case-insensitive.
pub fn unreleased_heading_pattern(labels: &[String]) -> Result<Regex> {
    let alternatives = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(r"(?i)## \[?(?:{alternatives})\]?"))?)
}

/// Builds the exact heading matcher for an already-released version.
pub fn version_heading_pattern(version: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"## \[{}\]", regex::escape(version)))?)
}
