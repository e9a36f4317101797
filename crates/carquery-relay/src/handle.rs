//! Caller side of the relay.

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use carquery_protocols::{RelayError, RelayRequest, RelayResponse};

use crate::relay::Envelope;

/// Cloneable sender for relay requests.
#[derive(Clone)]
pub struct RelayHandle {
    tx: mpsc::Sender<Envelope>,
}

impl RelayHandle {
    pub(crate) fn new(tx: mpsc::Sender<Envelope>) -> Self {
        Self { tx }
    }

    /// Send a request and wait for its reply.
    ///
    /// Backend and window failures arrive as `Ok` responses with
    /// `success == false`. `Err` means the relay itself is gone.
    pub async fn send(&self, request: RelayRequest) -> Result<RelayResponse, RelayError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Envelope { request, reply })
            .await
            .map_err(|_| RelayError::Closed)?;
        rx.await.map_err(|_| RelayError::NoResponse)
    }

    /// Send an undecoded message. Messages that are not a known action are
    /// answered locally with a failure response.
    pub async fn send_raw(&self, message: Value) -> Result<RelayResponse, RelayError> {
        match serde_json::from_value::<RelayRequest>(message) {
            Ok(request) => self.send(request).await,
            Err(e) => {
                warn!("Rejected relay message: {}", e);
                Ok(RelayResponse::failure(format!("Unsupported message: {}", e)))
            }
        }
    }

    /// Whether the relay task is still accepting requests.
    pub fn is_running(&self) -> bool {
        !self.tx.is_closed()
    }
}
