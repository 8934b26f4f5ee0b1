use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// One named group of repositories listed in the profile README
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub repos: Vec<String>,
}

/// Configuration for the README description sync
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub organization: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl SyncConfig {
    /// Loads the configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// All repositories across categories, in listing order
    #[must_use]
    pub fn all_repos(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|category| category.repos.iter().map(String::as_str))
            .collect()
    }
}
