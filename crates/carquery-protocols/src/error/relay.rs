//! Relay transport errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Relay is not running")]
    Closed,

    #[error("Relay dropped the request without responding")]
    NoResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_display() {
        assert!(RelayError::Closed.to_string().contains("not running"));
        assert!(RelayError::NoResponse.to_string().contains("without responding"));
    }
}
