use clap::{Parser, Subcommand};
use notify::ReleaseStatus;

#[derive(Parser)]
#[command(name = "relkit")]
#[command(author, version, about = "Release pipeline utilities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a release outcome notification to a chat webhook
    Notify {
        /// Webhook endpoint URL
        #[clap(long)]
        webhook: String,

        /// Repository name (e.g. wujihandpy)
        #[clap(long)]
        repo: String,

        /// Version number (e.g. 1.5.0)
        #[clap(long)]
        version: String,

        /// Release page URL for the card button
        #[clap(long)]
        release_url: String,

        /// Release outcome
        #[clap(long, value_enum)]
        status: ReleaseStatus,
    },

    /// Parse repo=version lines from stdin into a JSON array
    ParseRepos,

    /// Promote the unreleased changelog section to a released version
    Changelog {
        /// Path to the CHANGELOG.md file
        #[clap(long)]
        file: String,

        /// Version number (e.g. 1.5.0)
        #[clap(long)]
        version: String,

        /// Release date YYYY-MM-DD (defaults to today)
        #[clap(long)]
        date: Option<String>,
    },

    /// Fetch repository descriptions and patch them into the profile README
    Readme {
        /// Path to the repository configuration file
        #[clap(long, default_value = "repos-config.yml")]
        config: String,

        /// Path to the README file to update
        #[clap(long, default_value = "profile/README.md")]
        readme: String,
    },
}
