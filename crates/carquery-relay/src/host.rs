//! In-process window host.
//!
//! Records every surface it opens so the caller can report what was opened.
//! Nothing is rendered; a real UI shell implements
//! [`WindowHost`](carquery_protocols::WindowHost) itself.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use carquery_protocols::{WindowError, WindowHost, WindowId, WindowSpec};

/// A surface opened by [`SessionWindowHost`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpenWindow {
    pub id: WindowId,
    pub spec: WindowSpec,
    pub opened_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SessionWindowHost {
    windows: DashMap<WindowId, OpenWindow>,
    next_id: AtomicU64,
}

impl SessionWindowHost {
    pub fn new() -> Self {
        Self {
            windows: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn get(&self, id: WindowId) -> Option<OpenWindow> {
        self.windows.get(&id).map(|w| w.value().clone())
    }
}

impl Default for SessionWindowHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowHost for SessionWindowHost {
    async fn create_window(&self, spec: WindowSpec) -> Result<WindowId, WindowError> {
        if spec.url.trim().is_empty() {
            return Err(WindowError::CreationFailed("window url is empty".to_string()));
        }

        let id = WindowId(self.next_id.fetch_add(1, Ordering::Relaxed));
        info!(
            "Window {} opened: {} ({}x{})",
            id, spec.url, spec.width, spec.height
        );
        self.windows.insert(
            id,
            OpenWindow {
                id,
                spec,
                opened_at: Utc::now(),
            },
        );
        Ok(id)
    }
}
