//! Relay dispatch.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use carquery_protocols::{Backend, RelayRequest, RelayResponse, WindowHost, WindowSpec};

use crate::handle::RelayHandle;

/// Queue depth between surfaces and the relay task.
const RELAY_QUEUE_CAPACITY: usize = 32;

/// A request waiting for its single reply.
pub(crate) struct Envelope {
    pub request: RelayRequest,
    pub reply: oneshot::Sender<RelayResponse>,
}

/// Dispatches relay requests to the backend or the window host.
#[derive(Clone)]
pub struct Relay {
    backend: Arc<dyn Backend>,
    windows: Arc<dyn WindowHost>,
    window_spec: WindowSpec,
}

impl Relay {
    pub fn new(backend: Arc<dyn Backend>, windows: Arc<dyn WindowHost>) -> Self {
        Self {
            backend,
            windows,
            window_spec: WindowSpec::popup("popup.html"),
        }
    }

    /// Override what `openPersistentWindow` opens.
    pub fn with_window_spec(mut self, spec: WindowSpec) -> Self {
        self.window_spec = spec;
        self
    }

    /// Handle one request. Every outcome, including failure, is a response.
    pub async fn handle(&self, request: RelayRequest) -> RelayResponse {
        debug!(action = request.action(), "Relay handling request");
        match request {
            RelayRequest::FetchVariants { data } => match self.backend.send(&data).await {
                Ok(value) => RelayResponse::data(value),
                Err(e) => {
                    warn!("fetchVariants failed: {}", e);
                    RelayResponse::failure(e.to_string())
                }
            },
            RelayRequest::OpenPersistentWindow => {
                match self.windows.create_window(self.window_spec.clone()).await {
                    Ok(id) => {
                        info!("Opened persistent window {}", id);
                        RelayResponse::window(id)
                    }
                    Err(e) => {
                        warn!("openPersistentWindow failed: {}", e);
                        RelayResponse::failure(e.to_string())
                    }
                }
            }
        }
    }

    /// Run the relay as a background task and return a handle to it.
    ///
    /// Each request is served on its own task, so a slow backend call does
    /// not hold up a window request behind it. The task stops once every
    /// handle has been dropped.
    pub fn spawn(self) -> RelayHandle {
        let (tx, mut rx) = mpsc::channel::<Envelope>(RELAY_QUEUE_CAPACITY);

        tokio::spawn(async move {
            while let Some(envelope) = rx.recv().await {
                let relay = self.clone();
                tokio::spawn(async move {
                    let Envelope { request, reply } = envelope;
                    let response = relay.handle(request).await;
                    // oneshot::Sender::send consumes the sender: one reply per request.
                    if reply.send(response).is_err() {
                        debug!("Relay caller went away before the reply arrived");
                    }
                });
            }
            debug!("Relay task stopped");
        });

        RelayHandle::new(tx)
    }
}
