//! Configuration schema definitions.

use std::path::PathBuf;

use carquery_protocols::{DEFAULT_ENDPOINT, QueryMode, QueryTarget, WindowKind};
use serde::{Deserialize, Serialize};

/// Key singled out for highlighted display when nothing else is configured.
pub const DEFAULT_HIGHLIGHT_KEY: &str = "final_response";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout. Unset means the transport default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Query builder configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub mode: QueryMode,

    #[serde(default)]
    pub target: QueryTarget,
}

/// Response display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_highlight_key")]
    pub highlight_key: String,

    /// Print the remainder expanded rather than collapsed to its size.
    #[serde(default)]
    pub expand_remainder: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_key: default_highlight_key(),
            expand_remainder: false,
        }
    }
}

fn default_highlight_key() -> String {
    DEFAULT_HIGHLIGHT_KEY.to_string()
}

/// Catalog source. No path means the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Persistent window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_url")]
    pub url: String,

    /// `popup` (default) or `normal`.
    #[serde(default)]
    pub kind: WindowKind,

    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            url: default_window_url(),
            kind: WindowKind::Popup,
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

fn default_window_url() -> String {
    "popup.html".to_string()
}

fn default_window_width() -> u32 {
    420
}

fn default_window_height() -> u32 {
    640
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Console filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Also write daily-rolling log files.
    #[serde(default = "default_true")]
    pub file: bool,

    /// Log directory. Defaults to `~/.carquery/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: true,
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

/// `~/.carquery`, or `.carquery` when no home directory is known.
pub fn carquery_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".carquery"))
        .unwrap_or_else(|| PathBuf::from(".carquery"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.endpoint, "http://127.0.0.1:5000/v1/chat");
        assert_eq!(config.backend.timeout_seconds, None);
        assert_eq!(config.query.mode, QueryMode::Lenient);
        assert_eq!(config.query.target, QueryTarget::OnRoadPrice);
        assert_eq!(config.display.highlight_key, "final_response");
        assert!(config.catalog.path.is_none());
        assert_eq!((config.window.width, config.window.height), (420, 640));
        assert_eq!(config.window.kind, WindowKind::Popup);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_query_config_serialization() {
        let config = QueryConfig {
            mode: QueryMode::Strict,
            target: QueryTarget::Variant,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "strict");
        assert_eq!(json["target"], "variant");
    }

    #[test]
    fn test_carquery_dir_name() {
        assert!(carquery_dir().ends_with(".carquery"));
    }
}
