//! Backend client errors.

use thiserror::Error;

/// Failure of a single backend round-trip.
///
/// Display strings are shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid data: {0}")]
    MalformedResponse(String),

    /// The client could not be set up from its configuration.
    #[error("Invalid backend configuration: {0}")]
    Config(String),
}
