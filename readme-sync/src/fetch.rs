use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

use crate::error::Result;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct RepoPayload {
    description: Option<String>,
}

/// GitHub API client scoped to one organization
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_base: String,
    organization: String,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a client with a fixed request timeout. Requests are
    /// authenticated when a bearer token is supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(organization: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            organization: organization.into(),
            token,
        })
    }

    /// Overrides the API base URL
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Fetches the description of one repository. A repository without a
    /// description maps to an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status
    pub async fn repo_description(&self, repo: &str) -> Result<String> {
        let url = format!("{}/repos/{}/{}", self.api_base, self.organization, repo);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(USER_AGENT, "relkit");

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let payload: RepoPayload = request.send().await?.error_for_status()?.json().await?;

        Ok(payload.description.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_description_with_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/alpha"))
            .and(header("Authorization", "Bearer secret-token"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"description": "An alpha thing"})),
            )
            .mount(&server)
            .await;

        let client = GithubClient::new("acme", Some("secret-token".to_string()))
            .unwrap()
            .with_api_base(server.uri());

        let description = client.repo_description("alpha").await.unwrap();
        assert_eq!(description, "An alpha thing");
    }

    #[tokio::test]
    async fn null_description_maps_to_empty_string() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/beta"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"description": null})),
            )
            .mount(&server)
            .await;

        let client = GithubClient::new("acme", None)
            .unwrap()
            .with_api_base(server.uri());

        let description = client.repo_description("beta").await.unwrap();
        assert_eq!(description, "");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = GithubClient::new("acme", None)
            .unwrap()
            .with_api_base(server.uri());

        let err = client.repo_description("missing").await.unwrap_err();
        assert!(matches!(err, crate::error::SyncError::Http(_)));
    }
}
