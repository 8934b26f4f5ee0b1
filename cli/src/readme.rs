use indicatif::{ProgressBar, ProgressStyle};
use readme_sync::{DescriptionUpdate, GithubClient, SyncConfig, apply_descriptions};
use std::fs;
use std::path::Path;
use tokio::runtime::Runtime;

use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;

pub fn execute(config_path: String, readme_path: String) -> Result<()> {
    let mut progress = ProgressTracker::new("README Sync").with_steps(vec![
        "Loading repository configuration".to_string(),
        "Fetching repository descriptions".to_string(),
        "Patching README".to_string(),
        "Writing README".to_string(),
    ]);

    progress.start_step();
    let config = SyncConfig::load(Path::new(&config_path))
        .map_err(|e| CliError::Sync(e).with_context("Failed to load repository configuration"))?;
    let repos: Vec<String> = config
        .all_repos()
        .into_iter()
        .map(str::to_string)
        .collect();
    if repos.is_empty() {
        return Err(CliError::Other(format!(
            "No repositories configured in {config_path}"
        )));
    }
    progress.complete_step();

    progress.start_step();
    // The token is read once here and passed down as a plain value; nothing
    // below this point consults the environment.
    let token = std::env::var("GITHUB_TOKEN").ok();
    if token.is_none() {
        ui::warning_message("GITHUB_TOKEN is not set; using unauthenticated API calls");
    }
    let client = GithubClient::new(config.organization.clone(), token)?;

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;
    let updates = rt.block_on(fetch_descriptions(&client, &repos));
    progress.complete_step();

    progress.start_step();
    let readme = Path::new(&readme_path);
    if !readme.exists() {
        return Err(CliError::Other(format!("README not found: {readme_path}")));
    }
    let content = fs::read_to_string(readme)?;
    let report = apply_descriptions(&content, &config.organization, &updates)?;
    progress.complete_step();

    progress.start_step();
    fs::write(readme, &report.content)?;
    progress.complete_step();
    progress.complete();

    for repo in &report.missing {
        ui::warning_message(&format!("No anchor found for {repo} in README"));
    }
    ui::info_message(&format!(
        "Made {} replacements for {} repositories",
        report.replaced,
        updates.len()
    ));

    Ok(())
}

async fn fetch_descriptions(client: &GithubClient, repos: &[String]) -> Vec<DescriptionUpdate> {
    let bar = ProgressBar::new(repos.len() as u64);
    let style = ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);

    let mut updates = Vec::with_capacity(repos.len());

    for repo in repos {
        bar.set_message(repo.clone());
        match client.repo_description(repo).await {
            Ok(description) => {
                bar.println(format!("  {repo}: {}", preview(&description)));
                updates.push(DescriptionUpdate {
                    repo: repo.clone(),
                    description,
                });
            }
            // Partial coverage is acceptable; the repo is simply left out of
            // the patch set.
            Err(err) => bar.println(format!("  {repo}: failed to fetch - {err}")),
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    updates
}

fn preview(description: &str) -> String {
    const MAX: usize = 60;
    if description.chars().count() > MAX {
        let truncated: String = description.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        description.to_string()
    }
}
