use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::card::{ReleaseNotification, build_card};
use crate::error::Result;

const DELIVERY_TIMEOUT_SECS: u64 = 10;

/// Webhook client delivering release cards to one endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    webhook_url: String,
}

impl WebhookClient {
    /// Creates a client with the fixed delivery timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DELIVERY_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }

    /// Performs the single outbound delivery. No retry: a timeout or
    /// non-success status is terminal for this invocation.
    ///
    /// # Errors
    ///
    /// `Payload` if the card cannot be serialized, `Http` for transport or
    /// status failures
    pub async fn send(&self, notification: &ReleaseNotification) -> Result<()> {
        let body = serde_json::to_string(&build_card(notification))?;

        self.client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ReleaseStatus;
    use crate::error::NotifyError;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn notification() -> ReleaseNotification {
        ReleaseNotification {
            repo: "wujihandpy".to_string(),
            version: "1.5.0".to_string(),
            release_url: "https://example.com/releases/v1.5.0".to_string(),
            status: ReleaseStatus::Success,
        }
    }

    #[tokio::test]
    async fn delivers_card_as_json_post() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(
                serde_json::json!({"msg_type": "interactive"}),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = WebhookClient::new(format!("{}/hook", server.uri())).unwrap();
        client.send(&notification()).await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_a_delivery_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = WebhookClient::new(format!("{}/hook", server.uri())).unwrap();
        let err = client.send(&notification()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Http(_)));
    }
}
