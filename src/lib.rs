//! BatchData MCP Server Library
//!
//! Exposes the BatchData real-estate API (address verification, autocomplete,
//! geocoding, property lookup, search and counting) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **batchdata**: HTTP client, error taxonomy and response interpretation
//!   - **tools**: one definition per MCP tool, each translating flat parameters
//!     into the nested request document the API expects
//!
//! # Example
//!
//! ```rust,no_run
//! use batchdata_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)?).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
