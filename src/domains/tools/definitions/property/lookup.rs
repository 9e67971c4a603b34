//! Single property lookup by street address or by parcel number.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::batchdata::{BatchDataError, BatchDataResult, Endpoint};
use crate::domains::tools::definitions::common::{PropertyTool, non_empty};

/// Parameters for the property lookup tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupPropertyParams {
    /// Street address
    #[serde(default)]
    pub street: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// State name or abbreviation
    pub state: String,

    /// ZIP code
    #[serde(default)]
    pub zip: Option<String>,

    /// County name (for APN lookup)
    #[serde(default)]
    pub county: Option<String>,

    /// Assessor Parcel Number
    #[serde(default)]
    pub apn: Option<String>,

    /// Include skip trace data
    #[serde(default)]
    pub skip_trace: bool,
}

#[derive(Debug, Serialize)]
pub struct LookupRequest {
    requests: [PropertyTarget; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<LookupOptions>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum PropertyTarget {
    Parcel { address: CountyAddress, apn: String },
    Street { address: StreetAddress },
}

#[derive(Debug, Serialize)]
struct CountyAddress {
    county: String,
    state: String,
}

#[derive(Debug, Serialize)]
struct StreetAddress {
    street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupOptions {
    skip_trace: bool,
}

impl LookupPropertyParams {
    /// Parcel mode wins when both `apn` and `county` are given.
    fn target(&self) -> BatchDataResult<PropertyTarget> {
        let parcel = non_empty(self.apn.as_deref()).zip(non_empty(self.county.as_deref()));
        if let Some((apn, county)) = parcel {
            return Ok(PropertyTarget::Parcel {
                address: CountyAddress {
                    county: county.to_string(),
                    state: self.state.clone(),
                },
                apn: apn.to_string(),
            });
        }

        match non_empty(self.street.as_deref()) {
            Some(street) => Ok(PropertyTarget::Street {
                address: StreetAddress {
                    street: street.to_string(),
                    city: self.city.clone(),
                    state: self.state.clone(),
                    zip: self.zip.clone(),
                },
            }),
            None => Err(BatchDataError::validation(
                "Either provide street address details or APN with county",
            )),
        }
    }
}

/// Property lookup tool.
pub struct LookupPropertyTool;

impl PropertyTool for LookupPropertyTool {
    type Params = LookupPropertyParams;
    type Request = LookupRequest;

    const NAME: &'static str = "lookup-property";
    const DESCRIPTION: &'static str = "Look up detailed property information by street address, or by APN (Assessor Parcel Number) together with county and state.";
    const ENDPOINT: Endpoint = Endpoint::PropertyLookup;
    const FAILURE_CONTEXT: &'static str = "looking up property";

    fn build_request(params: &LookupPropertyParams) -> BatchDataResult<LookupRequest> {
        Ok(LookupRequest {
            requests: [params.target()?],
            options: params.skip_trace.then_some(LookupOptions { skip_trace: true }),
        })
    }
}
