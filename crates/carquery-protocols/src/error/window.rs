//! Window host errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window creation failed: {0}")]
    CreationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_failed() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert!(err.to_string().contains("no display"));
    }
}
