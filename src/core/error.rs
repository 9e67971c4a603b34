//! Error types and handling for the MCP server.
//!
//! Only startup and transport failures surface through this type. Failures of
//! individual tool calls are turned into error envelopes inside the tools domain
//! and never reach here.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::batchdata::BatchDataError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors (e.g. missing API credential).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The BatchData client could not be constructed.
    #[error("BatchData client error: {0}")]
    BatchData(#[from] BatchDataError),

    /// The transport failed to start or terminated abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
