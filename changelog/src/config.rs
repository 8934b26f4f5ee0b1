/// Configuration options for changelog date formatting and heading matching
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub date_format: String,
    /// Section labels treated as "unreleased", matched case-insensitively
    pub unreleased_labels: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            unreleased_labels: vec!["Unreleased".to_string(), "未发布".to_string()],
        }
    }
}
