//! HTTP backend implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use carquery_protocols::{Backend, ClientError, DEFAULT_ENDPOINT};

use crate::api::{ChatRequest, HealthStatus};

/// Posts queries to the chat endpoint as JSON.
pub struct HttpBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a backend whose requests give up after `timeout`.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// `GET /health` on the endpoint's origin.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.health_url()?;
        debug!("Checking backend health at {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    fn health_url(&self) -> Result<url::Url, ClientError> {
        url::Url::parse(&self.endpoint)
            .and_then(|u| u.join("/health"))
            .map_err(|e| ClientError::Config(format!("invalid endpoint {}: {}", self.endpoint, e)))
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, query: &str) -> Result<Value, ClientError> {
        debug!("POST {} query={:?}", self.endpoint, query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ChatRequest { query })
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Backend returned {}: {}", status.as_u16(), body);
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}

/// A request that could not even be built (bad URL) is a configuration
/// fault; anything else failed on the wire.
fn request_error(e: reqwest::Error) -> ClientError {
    if e.is_builder() {
        ClientError::Config(e.to_string())
    } else {
        ClientError::Network(e.to_string())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
