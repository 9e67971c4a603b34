//! Tools domain module.
//!
//! Each tool turns a validated parameter bag into one BatchData request and
//! returns the response (or a failure) as a single text result.
//!
//! ## Architecture
//!
//! - `definitions/` - one file per tool: params, request document, query builder
//! - `definitions/common.rs` - the `PropertyTool` trait and the shared
//!   build → call → format → envelope adapter
//! - `router.rs` - rmcp `ToolRouter` for the STDIO transport
//! - `registry.rs` - tool listing and name-based dispatch for the HTTP transport
//! - `error.rs` - registry-level error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a file in `definitions/address/` or `definitions/property/`
//! 2. Define the params struct and implement `PropertyTool`
//! 3. Export it in the parent `mod.rs`
//! 4. Add the route in `router.rs` and the dispatch arm in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::PropertyTool;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
