mod changelog;
mod cli;
mod error;
mod notify;
mod parse_repos;
mod progress;
mod readme;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Notify {
            webhook,
            repo,
            version,
            release_url,
            status,
        } => notify::execute(webhook, repo, version, release_url, status),
        Commands::ParseRepos => parse_repos::execute(),
        Commands::Changelog {
            file,
            version,
            date,
        } => changelog::execute(file, version, date),
        Commands::Readme { config, readme } => readme::execute(config, readme),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
