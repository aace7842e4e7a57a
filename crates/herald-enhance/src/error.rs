//! Enhancement error types

use thiserror::Error;

/// Enhancement-related errors
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// No API key available for the remote strategy
    #[error("API key required: set enhancement.api_key or the OPENAI_API_KEY environment variable")]
    MissingCredential,

    /// Non-success response from the remote endpoint
    #[error("Upstream error: {status} - {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// Transport failure or timeout
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote payload did not match the enhancement contract
    #[error("Invalid enhancement response: {0}")]
    InvalidResponse(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Strategy name not recognized
    #[error("Unknown enhancement strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type for enhancement operations
pub type Result<T> = std::result::Result<T, EnhanceError>;
