//! Domains module containing business logic organized by bounded contexts.
//!
//! - **batchdata**: the upstream API (client, errors, response interpretation)
//! - **tools**: MCP tools built on top of it

pub mod batchdata;
pub mod tools;
