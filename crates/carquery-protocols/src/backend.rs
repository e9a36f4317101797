//! Backend trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;

/// Endpoint the backend listens on when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/v1/chat";

/// Something that answers a natural-language query with arbitrary JSON.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the endpoint this backend talks to.
    fn endpoint(&self) -> &str;

    /// Send one query and return the parsed JSON response.
    ///
    /// Exactly one request is issued per call; failures are not retried.
    async fn send(&self, query: &str) -> Result<Value, ClientError>;
}
