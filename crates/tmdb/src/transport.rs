//! HTTP transport seam.
//!
//! The client only needs "GET this URL with these query pairs and give me
//! the status and body". Keeping that behind a trait lets tests serve
//! recorded fixtures without a network.

use async_trait::async_trait;
use tracing::error;

use crate::config::ClientConfig;
use crate::error::{Result, TmdbError};

/// Status code and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one GET request.
///
/// Implementations must not interpret the status code; a 404 is a
/// successful exchange at this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse>;
}

/// Production transport backed by [`reqwest`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client honouring the configured timeout and user agent
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TmdbError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors embed the full URL, api_key included
                let e = e.without_url();
                error!(url = %url, error = %e, timeout = e.is_timeout(), "TMDb request failed (transport)");
                TmdbError::Transport(e)
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TmdbError::Transport(e.without_url()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "{}").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(401, "{}").is_success());
        assert!(!RawResponse::new(500, "oops").is_success());
    }

    #[test]
    fn test_reqwest_transport_builds_from_config() {
        let config = ClientConfig::new("key");
        assert!(ReqwestTransport::new(&config).is_ok());
    }
}
