//! Window host protocol.
//!
//! A window host creates independent UI surfaces on behalf of the relay.
//! Surfaces outlive the request that created them.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::WindowError;

/// Identifier of a surface created by a [`WindowHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of surface to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    #[default]
    Popup,
    Normal,
}

/// What to open and how big.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: WindowKind,
    pub width: u32,
    pub height: u32,
}

impl WindowSpec {
    /// The persistent popup view: same page as the transient popup, fixed size.
    pub fn popup(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: WindowKind::Popup,
            width: 420,
            height: 640,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_kind(mut self, kind: WindowKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Host environment capable of opening UI surfaces.
#[async_trait]
pub trait WindowHost: Send + Sync {
    async fn create_window(&self, spec: WindowSpec) -> Result<WindowId, WindowError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_defaults() {
        let spec = WindowSpec::popup("popup.html");
        assert_eq!(spec.kind, WindowKind::Popup);
        assert_eq!((spec.width, spec.height), (420, 640));
    }

    #[test]
    fn test_spec_serialization() {
        let spec = WindowSpec::popup("popup.html").with_size(500, 700);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "popup");
        assert_eq!(json["width"], 500);
        assert_eq!(json["url"], "popup.html");
    }

    #[test]
    fn test_normal_kind_serialization() {
        let spec = WindowSpec::popup("popup.html").with_kind(WindowKind::Normal);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "normal");
    }

    #[test]
    fn test_window_id_transparent() {
        assert_eq!(serde_json::to_value(WindowId(3)).unwrap(), 3);
    }
}
