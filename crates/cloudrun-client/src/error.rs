//! Cloud Run client errors

use thiserror::Error;

/// Errors that can occur when interacting with the Cloud Run Admin API
#[derive(Debug, Error)]
pub enum CloudRunError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Cloud Run API returned an error
    #[error("Cloud Run API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Label selector could not be parsed
    #[error("Invalid label selector: {0}")]
    InvalidSelector(String),
}
