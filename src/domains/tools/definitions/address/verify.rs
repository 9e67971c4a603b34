//! Address verification tool.
//!
//! Standardizes and validates a single US postal address.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::batchdata::{BatchDataResult, Endpoint};
use crate::domains::tools::definitions::common::PropertyTool;

/// Parameters for the address verification tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAddressParams {
    /// Street address
    pub street: String,

    /// City name
    pub city: String,

    /// State name or abbreviation
    pub state: String,

    /// ZIP code
    pub zip: String,

    /// Optional request ID for tracking
    #[serde(default)]
    pub request_id: Option<String>,
}

/// `{ "requests": [ ... ] }` body for `/address/verify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyAddressRequest {
    pub requests: Vec<AddressToVerify>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressToVerify {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub request_id: String,
}

/// Address verification tool.
pub struct VerifyAddressTool;

impl PropertyTool for VerifyAddressTool {
    type Params = VerifyAddressParams;
    type Request = VerifyAddressRequest;

    const NAME: &'static str = "verify-address";
    const DESCRIPTION: &'static str = "Verify and standardize a US street address. Returns the USPS-normalized address with deliverability details as JSON.";
    const ENDPOINT: Endpoint = Endpoint::AddressVerify;
    const FAILURE_CONTEXT: &'static str = "verifying address";

    fn build_request(params: &VerifyAddressParams) -> BatchDataResult<VerifyAddressRequest> {
        Ok(VerifyAddressRequest {
            requests: vec![AddressToVerify {
                street: params.street.clone(),
                city: params.city.clone(),
                state: params.state.clone(),
                zip: params.zip.clone(),
                request_id: params.request_id.clone().unwrap_or_default(),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::batchdata::mock::MockApi;
    use crate::domains::tools::definitions::common::{invoke, test_support::text_of};
    use serde_json::json;

    fn springfield() -> VerifyAddressParams {
        serde_json::from_value(json!({
            "street": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62704"
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_request_id_becomes_empty() {
        let request = VerifyAddressTool::build_request(&springfield()).unwrap();
        assert_eq!(request.requests[0].request_id, "");
    }

    #[test]
    fn test_request_id_passed_through() {
        let mut params = springfield();
        params.request_id = Some("abc-1".to_string());
        let body = serde_json::to_value(VerifyAddressTool::build_request(&params).unwrap()).unwrap();
        assert_eq!(body["requests"][0]["requestId"], "abc-1");
    }

    #[tokio::test]
    async fn test_end_to_end_request() {
        let api = MockApi::responding(json!({"status": {"code": 200}}));
        let result = invoke::<VerifyAddressTool>(&api, &springfield()).await;

        assert_eq!(result.is_error, None);
        assert_eq!(
            text_of(&result),
            serde_json::to_string_pretty(&json!({"status": {"code": 200}})).unwrap()
        );

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Endpoint::AddressVerify);
        assert_eq!(
            calls[0].1,
            json!({"requests": [{
                "street": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zip": "62704",
                "requestId": ""
            }]})
        );
    }

    #[tokio::test]
    async fn test_server_error_becomes_error_envelope() {
        let api = MockApi::failing(500, "Internal Server Error");
        let result = invoke::<VerifyAddressTool>(&api, &springfield()).await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("Error verifying address:"));
        assert!(text.contains("500 Internal Server Error"));
    }
}
