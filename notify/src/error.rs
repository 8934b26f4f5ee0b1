use thiserror::Error;

/// Type alias for Result with `NotifyError`
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Errors for notification construction and delivery
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The card payload could not be serialized
    #[error("Failed to build notification payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The webhook call failed: network, timeout or HTTP status
    #[error("Webhook delivery failed: {0}")]
    Http(#[from] reqwest::Error),
}
