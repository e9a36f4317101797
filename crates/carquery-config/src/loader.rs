//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use carquery_protocols::Catalog;
use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::{carquery_dir, Config};

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config location: `~/.carquery/config.toml`.
    pub fn default_path() -> PathBuf {
        carquery_dir().join("config.toml")
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::load(path)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load the catalog named by the config, or the built-in one.
    pub fn load_catalog(config: &Config) -> Result<Catalog, ConfigError> {
        let Some(path) = &config.catalog.path else {
            return Ok(Catalog::builtin());
        };
        let path = PathBuf::from(Self::expand_path(&path.to_string_lossy()));
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(&path)?;
        let catalog = Self::load_catalog_str(&content)?;
        debug!(
            "Loaded catalog from {} ({} brands)",
            path.display(),
            catalog.brands().len()
        );
        Ok(catalog)
    }

    /// Parse a catalog document.
    pub fn load_catalog_str(content: &str) -> Result<Catalog, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.carquery`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}
