use serde::{Deserialize, Serialize};

/// A repository/version pair parsed from `repo=version` input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoVersionEntry {
    pub repo: String,
    pub version: String,
}
