//! Address geocoding tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::batchdata::{BatchDataResult, Endpoint};
use crate::domains::tools::definitions::common::PropertyTool;

/// Parameters for the geocoding tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeocodeAddressParams {
    /// Full address to geocode
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeRequest {
    pub requests: Vec<AddressToGeocode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressToGeocode {
    pub address: String,
}

/// Address geocoding tool.
pub struct GeocodeAddressTool;

impl PropertyTool for GeocodeAddressTool {
    type Params = GeocodeAddressParams;
    type Request = GeocodeRequest;

    const NAME: &'static str = "geocode-address";
    const DESCRIPTION: &'static str = "Convert a full address into latitude/longitude coordinates.";
    const ENDPOINT: Endpoint = Endpoint::AddressGeocode;
    const FAILURE_CONTEXT: &'static str = "geocoding address";

    fn build_request(params: &GeocodeAddressParams) -> BatchDataResult<GeocodeRequest> {
        Ok(GeocodeRequest {
            requests: vec![AddressToGeocode {
                address: params.address.clone(),
            }],
        })
    }
}
