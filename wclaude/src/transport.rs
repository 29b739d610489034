//! Transport trait and reqwest-based HTTP implementation.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;

use crate::error::ClaudeError;
use crate::serde_api::{build_api_request, interpret_response};
use crate::types::{ClaudeRequest, ClaudeResponse, SecretString};

pub const CLAUDE_BASE_URL: &str = "https://api.anthropic.com/v1";

pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const ANTHROPIC_BETA: &str = "messages-2023-12-15";

/// The reference behavior leaves the upstream wait unbounded; this bound is
/// the one we chose instead, mapped to the `Timeout` error kind on expiry.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub type ClaudeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait ClaudeTransport: Send + Sync + std::fmt::Debug {
    fn complete<'a>(
        &'a self,
        request: ClaudeRequest,
        api_key: SecretString,
    ) -> ClaudeFuture<'a, Result<ClaudeResponse, ClaudeError>>;
}

#[derive(Debug, Clone)]
pub struct ClaudeHttpTransport {
    client: Client,
    base_url: String,
}

impl ClaudeHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: CLAUDE_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn default_client() -> Result<Client, ClaudeError> {
        Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ClaudeError::transport(err.to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ClaudeTransport for ClaudeHttpTransport {
    fn complete<'a>(
        &'a self,
        request: ClaudeRequest,
        api_key: SecretString,
    ) -> ClaudeFuture<'a, Result<ClaudeResponse, ClaudeError>> {
        Box::pin(async move {
            let api_request = build_api_request(request)?;
            let url = self.endpoint("messages");
            let response = self
                .client
                .post(url)
                .header("x-api-key", api_key.expose())
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("anthropic-beta", ANTHROPIC_BETA)
                .header("anthropic-dangerous-direct-browser-access", "true")
                .json(&api_request)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ClaudeError::timeout(err.to_string())
                    } else {
                        ClaudeError::transport(err.to_string())
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ClaudeError::upstream(status.as_u16(), body));
            }

            let raw_body = response
                .text()
                .await
                .map_err(|err| ClaudeError::transport(err.to_string()))?;

            interpret_response(&raw_body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ClaudeHttpTransport;

    #[test]
    fn endpoint_joins_base_url_without_doubled_slashes() {
        let client = ClaudeHttpTransport::default_client().expect("client should build");
        let transport = ClaudeHttpTransport::new(client).with_base_url("http://localhost:8999/v1/");

        assert_eq!(transport.endpoint("messages"), "http://localhost:8999/v1/messages");
    }
}
