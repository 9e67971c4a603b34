//! Address tools: verification, autocomplete, geocoding and reverse geocoding.

pub mod autocomplete;
pub mod geocode;
pub mod reverse_geocode;
pub mod verify;

pub use autocomplete::{AutocompleteAddressParams, AutocompleteAddressTool};
pub use geocode::{GeocodeAddressParams, GeocodeAddressTool};
pub use reverse_geocode::{ReverseGeocodeParams, ReverseGeocodeTool};
pub use verify::{VerifyAddressParams, VerifyAddressTool};
