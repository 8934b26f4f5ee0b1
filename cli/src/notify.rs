use notify::{ReleaseNotification, ReleaseStatus, WebhookClient};
use tokio::runtime::Runtime;

use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(
    webhook: String,
    repo: String,
    version: String,
    release_url: String,
    status: ReleaseStatus,
) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;

    let notification = ReleaseNotification {
        repo,
        version,
        release_url,
        status,
    };
    let client = WebhookClient::new(webhook)?;

    rt.block_on(client.send(&notification))
        .map_err(|e| CliError::Notify(e).with_context("Release notification was not delivered"))?;

    ui::success_message("Release notification delivered");
    Ok(())
}
