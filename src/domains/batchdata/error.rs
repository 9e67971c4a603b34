//! Errors raised while translating a tool call into a BatchData request.

use thiserror::Error;

/// Result type for BatchData operations.
pub type BatchDataResult<T> = Result<T, BatchDataError>;

/// Failure of a single tool invocation, from parameter checking to response parsing.
#[derive(Debug, Error)]
pub enum BatchDataError {
    /// The supplied parameters do not describe a valid request.
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-success HTTP status.
    #[error("API request failed: {status} {status_text}")]
    ApiRequest { status: u16, status_text: String },

    /// No HTTP status was obtained (DNS, connect, timeout, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A request or response document was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Serialization(String),
}

impl BatchDataError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

impl From<serde_json::Error> for BatchDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for BatchDataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::transport("Request timed out")
        } else if err.is_connect() {
            Self::transport(format!("Connection failed: {err}"))
        } else {
            Self::transport(err.to_string())
        }
    }
}
