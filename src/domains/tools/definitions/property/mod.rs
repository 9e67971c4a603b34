//! Property tools: lookup, criteria search, boundary search and counting.
//!
//! Search, boundary search and count all post to the same endpoint and share
//! the criteria documents in `criteria.rs`.

pub mod boundary;
pub mod count;
pub mod criteria;
pub mod lookup;
pub mod search;

pub use boundary::{SearchByBoundaryParams, SearchByBoundaryTool};
pub use count::{CountPropertiesParams, CountPropertiesTool};
pub use lookup::{LookupPropertyParams, LookupPropertyTool};
pub use search::{SearchPropertiesParams, SearchPropertiesTool};
