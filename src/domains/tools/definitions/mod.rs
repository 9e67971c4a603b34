//! Tool definitions module.
//!
//! One file per tool, grouped by the API family it talks to.

pub mod address;
pub mod common;
pub mod numbers;
pub mod property;

pub use address::{AutocompleteAddressTool, GeocodeAddressTool, ReverseGeocodeTool, VerifyAddressTool};
pub use common::PropertyTool;
pub use property::{
    CountPropertiesTool, LookupPropertyTool, SearchByBoundaryTool, SearchPropertiesTool,
};
