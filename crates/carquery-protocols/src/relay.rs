//! Relay message definitions.
//!
//! Wire shapes:
//!
//! ```text
//! {"action":"fetchVariants","data":"<query>"} -> {"success":true,"data":<json>}
//! {"action":"openPersistentWindow"}           -> {"success":true,"windowId":<id>}
//! failure of either                           -> {"success":false,"error":"<message>"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::window::WindowId;

/// A request from a UI surface to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RelayRequest {
    /// Send `data` to the backend as the query.
    FetchVariants { data: String },
    /// Open a persistent copy of the popup view.
    OpenPersistentWindow,
}

impl RelayRequest {
    pub fn fetch(query: impl Into<String>) -> Self {
        Self::FetchVariants { data: query.into() }
    }

    /// The action name as it appears on the wire.
    pub fn action(&self) -> &'static str {
        match self {
            Self::FetchVariants { .. } => "fetchVariants",
            Self::OpenPersistentWindow => "openPersistentWindow",
        }
    }
}

/// The relay's single reply to a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<WindowId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn data(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            window_id: None,
            error: None,
        }
    }

    pub fn window(window_id: WindowId) -> Self {
        Self {
            success: true,
            data: None,
            window_id: Some(window_id),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            window_id: None,
            error: Some(error.into()),
        }
    }
}
