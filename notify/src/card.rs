use clap::ValueEnum;
use serde_json::{Value, json};

/// Outcome of a release run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReleaseStatus {
    Success,
    Failed,
}

/// The data shown in a release notification card
#[derive(Debug, Clone)]
pub struct ReleaseNotification {
    pub repo: String,
    pub version: String,
    pub release_url: String,
    pub status: ReleaseStatus,
}

/// Builds the interactive card payload for a release notification.
///
/// Success cards are green and carry a link button to the release; failure
/// cards are red and have no button.
#[must_use]
pub fn build_card(notification: &ReleaseNotification) -> Value {
    let ReleaseNotification {
        repo,
        version,
        release_url,
        status,
    } = notification;

    let (template, title, status_line) = match status {
        ReleaseStatus::Success => (
            "green",
            format!("🚀 {repo} v{version} released"),
            "✅ Released",
        ),
        ReleaseStatus::Failed => (
            "red",
            format!("❌ {repo} v{version} release failed"),
            "❌ Failed",
        ),
    };

    let content = [
        format!("**Repository**: {repo}"),
        format!("**Version**: v{version}"),
        format!("**Status**: {status_line}"),
    ]
    .join("\n");

    let mut elements = vec![json!({
        "tag": "div",
        "text": { "content": content, "tag": "lark_md" }
    })];

    if *status == ReleaseStatus::Success {
        elements.push(json!({
            "tag": "action",
            "actions": [{
                "tag": "button",
                "text": { "content": "View Release", "tag": "plain_text" },
                "url": release_url,
                "type": "primary"
            }]
        }));
    }

    json!({
        "msg_type": "interactive",
        "card": {
            "header": {
                "title": { "content": title, "tag": "plain_text" },
                "template": template
            },
            "elements": elements
        }
    })
}
