//! Error types for Fortnox API operations.

use thiserror::Error;

/// Errors that can occur during Fortnox API operations.
#[derive(Debug, Error)]
pub enum FortnoxError {
    /// Entity not found.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for Fortnox operations.
pub type Result<T> = core::result::Result<T, FortnoxError>;
