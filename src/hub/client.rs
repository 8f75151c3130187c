//! GitHub HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{HubError, Result};

use super::host::HostConfig;

/// Error body returned by the GitHub API
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// GitHub API client
pub struct HubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl HubClient {
    /// Create a new client bound to a resolved host
    pub fn new(host: &HostConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("hubctl/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: host.token.clone(),
            base_url: host.api_url(),
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .user_agent("hubctl-test")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url,
        }
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", api::MEDIA_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Turn a non-success response into an API error carrying its status
    /// and the server-provided message, if any.
    pub(crate) async fn api_error(&self, response: reqwest::Response) -> HubError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_default(),
            Err(e) => {
                debug!("Failed to read error body: {}", e);
                String::new()
            }
        };
        debug!("API error {}: {}", status, message);
        HubError::Api { status, message }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(&self, response: reqwest::Response) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(self.api_error(response).await);
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
impl HubClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string())
    }
}
