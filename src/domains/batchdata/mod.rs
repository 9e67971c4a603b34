//! BatchData API domain.
//!
//! - `client.rs` - the `PropertyApi` seam and its reqwest-backed implementation
//! - `error.rs` - failure taxonomy shared by query building and API calls
//! - `response.rs` - interpretation of raw responses into caller-facing text

mod client;
mod error;
pub mod response;

#[cfg(test)]
pub mod mock;

pub use client::{BatchDataClient, Endpoint, PropertyApi};
pub use error::{BatchDataError, BatchDataResult};
pub use response::ResponseShape;
