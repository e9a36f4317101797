//! Response formatting errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Paste JSON into the input first.")]
    EmptyInput,
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson {
            message: err.to_string(),
        }
    }
}
