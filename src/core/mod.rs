//! Core module containing shared infrastructure components.
//!
//! Configuration, the crate error type, the MCP server handler and the
//! transport layer live here; business logic lives under `domains`.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{BatchDataConfig, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
