use regex::Regex;

use crate::error::Result;

/// A repository name together with its replacement description
#[derive(Debug, Clone)]
pub struct DescriptionUpdate {
    pub repo: String,
    pub description: String,
}

/// Result of patching a README document
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub content: String,
    pub replaced: usize,
    /// Repositories whose anchor was not found in the document
    pub missing: Vec<String>,
}

const CELL_CLOSE: &str = "</td>";

fn anchor_pattern(organization: &str, repo: &str) -> Result<Regex> {
    let org = regex::escape(organization);
    let name = regex::escape(repo);
    Ok(Regex::new(&format!(
        r#"(?i)<a\s+href="https://github\.com/{org}/{name}"\s+target="_blank">\s*{name}\s*</a>\s*<br>"#
    ))?)
}

/// Replaces the description region following each repository anchor.
///
/// Each update is applied against the result of the previous one. A
/// repository with no anchor match is recorded in `missing` and skipped;
/// partial coverage is the normal case when some repositories are not yet
/// listed in the document.
///
/// # Errors
///
/// Returns an error only if an anchor pattern fails to compile.
pub fn apply_descriptions(
    content: &str,
    organization: &str,
    updates: &[DescriptionUpdate],
) -> Result<PatchReport> {
    let mut current = content.to_string();
    let mut replaced = 0;
    let mut missing = Vec::new();

    for update in updates {
        let anchor = anchor_pattern(organization, &update.repo)?;
        let (patched, count) = patch_cells(&current, &anchor, &update.description);

        if count == 0 {
            missing.push(update.repo.clone());
        } else {
            current = patched;
            replaced += count;
        }
    }

    Ok(PatchReport {
        content: current,
        replaced,
        missing,
    })
}

/// The description region runs from the anchor to the closing cell marker.
/// Bounding it by the next `</td>` keeps one repository's region from
/// swallowing another repository's anchor.
fn patch_cells(content: &str, anchor: &Regex, description: &str) -> (String, usize) {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut count = 0;

    for found in anchor.find_iter(content) {
        if found.start() < cursor {
            continue;
        }
        let Some(offset) = content[found.end()..].find(CELL_CLOSE) else {
            continue;
        };

        output.push_str(&content[cursor..found.end()]);
        output.push_str(description);
        output.push(' ');
        cursor = found.end() + offset;
        count += 1;
    }

    output.push_str(&content[cursor..]);
    (output, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(org: &str, repo: &str, description: &str) -> String {
        format!(
            "<td>\n<a href=\"https://github.com/{org}/{repo}\" target=\"_blank\">{repo}</a><br>\n{description}\n</td>"
        )
    }

    fn update(repo: &str, description: &str) -> DescriptionUpdate {
        DescriptionUpdate {
            repo: repo.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn replaces_only_listed_repositories() {
        let readme = format!(
            "<table><tr>{}{}</tr></table>",
            cell("acme", "alpha", "old alpha text"),
            cell("acme", "beta", "old beta text"),
        );

        let report =
            apply_descriptions(&readme, "acme", &[update("alpha", "fresh alpha text")]).unwrap();

        assert_eq!(report.replaced, 1);
        assert!(report.missing.is_empty());
        assert!(report.content.contains("fresh alpha text"));
        assert!(!report.content.contains("old alpha text"));
        assert!(report.content.contains("old beta text"));
    }

    #[test]
    fn records_missing_anchor_without_failing() {
        let readme = format!("<table>{}</table>", cell("acme", "alpha", "old"));

        let report = apply_descriptions(
            &readme,
            "acme",
            &[update("alpha", "new"), update("gamma", "never applied")],
        )
        .unwrap();

        assert_eq!(report.replaced, 1);
        assert_eq!(report.missing, vec!["gamma".to_string()]);
        assert!(!report.content.contains("never applied"));
    }

    #[test]
    fn preserves_anchor_and_cell_close_verbatim() {
        let readme = cell("acme", "alpha", "old");

        let report = apply_descriptions(&readme, "acme", &[update("alpha", "new")]).unwrap();

        assert!(
            report
                .content
                .contains("<a href=\"https://github.com/acme/alpha\" target=\"_blank\">alpha</a><br>")
        );
        assert!(report.content.ends_with("new </td>"));
    }

    #[test]
    fn anchor_match_is_case_insensitive() {
        let readme =
            "<td><A HREF=\"https://github.com/acme/alpha\" TARGET=\"_blank\">Alpha</A><BR>old</td>";

        let report = apply_descriptions(readme, "acme", &[update("alpha", "new")]).unwrap();
        assert_eq!(report.replaced, 1);
    }

    #[test]
    fn description_region_stops_at_cell_close() {
        // alpha's cell is immediately followed by beta's; patching alpha must
        // not disturb beta's anchor or text.
        let readme = format!(
            "{}{}",
            cell("acme", "alpha", "old alpha"),
            cell("acme", "beta", "old beta"),
        );

        let report = apply_descriptions(
            &readme,
            "acme",
            &[update("alpha", "new alpha"), update("beta", "new beta")],
        )
        .unwrap();

        assert_eq!(report.replaced, 2);
        assert!(report.content.contains("new alpha"));
        assert!(report.content.contains("new beta"));
    }

    #[test]
    fn anchor_without_closing_cell_is_a_miss() {
        let readme = "<a href=\"https://github.com/acme/alpha\" target=\"_blank\">alpha</a><br>dangling";

        let report = apply_descriptions(readme, "acme", &[update("alpha", "new")]).unwrap();
        assert_eq!(report.replaced, 0);
        assert_eq!(report.missing, vec!["alpha".to_string()]);
        assert_eq!(report.content, readme);
    }

    #[test]
    fn description_with_dollar_signs_is_inserted_literally() {
        let readme = cell("acme", "alpha", "old");

        let report =
            apply_descriptions(&readme, "acme", &[update("alpha", "costs $1 and ${2}")]).unwrap();
        assert!(report.content.contains("costs $1 and ${2}"));
    }
}
