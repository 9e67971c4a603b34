//! Reverse geocoding tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::batchdata::{BatchDataResult, Endpoint};
use crate::domains::tools::definitions::common::PropertyTool;
use crate::domains::tools::definitions::numbers;

/// Parameters for the reverse geocoding tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReverseGeocodeParams {
    /// Latitude coordinate
    pub latitude: f64,

    /// Longitude coordinate
    pub longitude: f64,
}

/// Single `{ "request": { ... } }` body, unlike the batch endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReverseGeocodeRequest {
    pub request: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    #[serde(serialize_with = "numbers::compact")]
    pub latitude: f64,
    #[serde(serialize_with = "numbers::compact")]
    pub longitude: f64,
}

/// Reverse geocoding tool.
pub struct ReverseGeocodeTool;

impl PropertyTool for ReverseGeocodeTool {
    type Params = ReverseGeocodeParams;
    type Request = ReverseGeocodeRequest;

    const NAME: &'static str = "reverse-geocode";
    const DESCRIPTION: &'static str = "Find the street address closest to a latitude/longitude coordinate.";
    const ENDPOINT: Endpoint = Endpoint::AddressReverseGeocode;
    const FAILURE_CONTEXT: &'static str = "reverse geocoding";

    fn build_request(params: &ReverseGeocodeParams) -> BatchDataResult<ReverseGeocodeRequest> {
        Ok(ReverseGeocodeRequest {
            request: Coordinates {
                latitude: params.latitude,
                longitude: params.longitude,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::batchdata::mock::MockApi;
    use crate::domains::tools::definitions::common::{invoke, test_support::text_of};
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let params = ReverseGeocodeParams {
            latitude: 39.7817,
            longitude: -89.6501,
        };
        let body =
            serde_json::to_value(ReverseGeocodeTool::build_request(&params).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"request": {"latitude": 39.7817, "longitude": -89.6501}})
        );
    }

    #[tokio::test]
    async fn test_failure_message_uses_context() {
        let api = MockApi::failing(401, "Unauthorized");
        let params = ReverseGeocodeParams {
            latitude: 0.0,
            longitude: 0.0,
        };
        let result = invoke::<ReverseGeocodeTool>(&api, &params).await;
        assert_eq!(
            text_of(&result),
            "Error reverse geocoding: API request failed: 401 Unauthorized"
        );
    }
}
