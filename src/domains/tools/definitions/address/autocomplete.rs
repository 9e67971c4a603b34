//! Address autocomplete tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::batchdata::{BatchDataResult, Endpoint};
use crate::domains::tools::definitions::common::PropertyTool;
use crate::domains::tools::definitions::numbers;

fn default_usps_verified() -> bool {
    true
}

fn default_take() -> u32 {
    4
}

/// Parameters for the address autocomplete tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteAddressParams {
    /// Partial or full address to search
    pub query: String,

    /// Only return USPS verified addresses
    #[serde(default = "default_usps_verified")]
    pub usps_verified: bool,

    /// Number of results to skip
    #[serde(default, deserialize_with = "numbers::count")]
    pub skip: u32,

    /// Number of results to return
    #[serde(default = "default_take", deserialize_with = "numbers::count")]
    pub take: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteRequest {
    pub search_criteria: AutocompleteCriteria,
    pub options: AutocompleteOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutocompleteCriteria {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteOptions {
    pub usps_verified_addresses: bool,
    pub skip: u32,
    pub take: u32,
}

/// Address autocomplete tool.
pub struct AutocompleteAddressTool;

impl PropertyTool for AutocompleteAddressTool {
    type Params = AutocompleteAddressParams;
    type Request = AutocompleteRequest;

    const NAME: &'static str = "autocomplete-address";
    const DESCRIPTION: &'static str = "Suggest complete addresses for a partial address string. Supports paging with skip/take and filtering to USPS-verified addresses.";
    const ENDPOINT: Endpoint = Endpoint::AddressAutocomplete;
    const FAILURE_CONTEXT: &'static str = "autocompleting address";

    fn build_request(params: &AutocompleteAddressParams) -> BatchDataResult<AutocompleteRequest> {
        Ok(AutocompleteRequest {
            search_criteria: AutocompleteCriteria {
                query: params.query.clone(),
            },
            options: AutocompleteOptions {
                usps_verified_addresses: params.usps_verified,
                skip: params.skip,
                take: params.take,
            },
        })
    }
}
