//! Configuration validation.

use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::schema::Config;

/// Timeouts above this are accepted but flagged.
const LONG_TIMEOUT_SECONDS: u64 = 300;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse into the first error, if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_backend(config, &mut result);
        Self::validate_display(config, &mut result);
        Self::validate_window(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_backend(config: &Config, result: &mut ValidationResult) {
        match url::Url::parse(&config.backend.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                if url.host_str().is_none() {
                    result.add_error(ValidationError::new(
                        "backend.endpoint",
                        "endpoint has no host",
                    ));
                }
            }
            Ok(url) => {
                result.add_error(ValidationError::new(
                    "backend.endpoint",
                    format!("unsupported scheme '{}', expected http or https", url.scheme()),
                ));
            }
            Err(e) => {
                result.add_error(ValidationError::new(
                    "backend.endpoint",
                    format!("invalid URL: {}", e),
                ));
            }
        }

        match config.backend.timeout_seconds {
            Some(0) => {
                result.add_error(ValidationError::new(
                    "backend.timeout_seconds",
                    "timeout_seconds must be greater than 0",
                ));
            }
            Some(t) if t > LONG_TIMEOUT_SECONDS => {
                result.add_warning(ValidationWarning::new(
                    "backend.timeout_seconds",
                    format!("timeout of {}s is very long", t),
                ));
            }
            _ => {}
        }
    }

    fn validate_display(config: &Config, result: &mut ValidationResult) {
        if config.display.highlight_key.trim().is_empty() {
            result.add_error(ValidationError::new(
                "display.highlight_key",
                "highlight_key cannot be empty",
            ));
        }
    }

    fn validate_window(config: &Config, result: &mut ValidationResult) {
        if config.window.width == 0 || config.window.height == 0 {
            result.add_error(ValidationError::new(
                "window",
                "window width and height must be greater than 0",
            ));
        }
        if config.window.url.trim().is_empty() {
            result.add_error(ValidationError::new("window.url", "url cannot be empty"));
        }
    }

    /// `level` is a filter such as `warn` or `warn,carquery_core=debug`.
    /// Every directive must end in a known level; a bare word that is not
    /// a level would be read as a target name and silence the console.
    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new("logging.level", "level cannot be empty"));
            return;
        }

        for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let level_part = directive
                .rsplit_once('=')
                .map_or(directive, |(_, level)| level);
            if LevelFilter::from_str(level_part).is_err() {
                result.add_error(ValidationError::new(
                    "logging.level",
                    format!(
                        "unknown log level '{}' in '{}' (expected trace, debug, info, warn, error or off)",
                        level_part, directive
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
