//! Count-only property search.
//!
//! Sends the same location and valuation filters as `search-properties` but
//! asks for zero rows, so only the match count travels back.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::criteria::{PropertyFilters, SearchOptions, SearchRequest};
use crate::domains::batchdata::{BatchDataResult, Endpoint, ResponseShape};
use crate::domains::tools::definitions::common::PropertyTool;

/// Parameters for the property count tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountPropertiesParams {
    /// Location query (city, state, etc.)
    #[serde(default)]
    pub query: Option<String>,

    /// Minimum estimated property value
    #[serde(default)]
    pub min_estimated_value: Option<f64>,

    /// Maximum estimated property value
    #[serde(default)]
    pub max_estimated_value: Option<f64>,

    /// Minimum equity percentage
    #[serde(default)]
    pub min_equity_percent: Option<f64>,

    /// Property type (e.g., 'Single Family')
    #[serde(default)]
    pub property_type: Option<String>,
}

/// Property count tool.
pub struct CountPropertiesTool;

impl PropertyTool for CountPropertiesTool {
    type Params = CountPropertiesParams;
    type Request = SearchRequest;

    const NAME: &'static str = "count-properties";
    const DESCRIPTION: &'static str = "Count properties matching location, valuation, equity and property type filters without retrieving the property records.";
    const ENDPOINT: Endpoint = Endpoint::PropertySearch;
    const FAILURE_CONTEXT: &'static str = "counting properties";

    fn build_request(params: &CountPropertiesParams) -> BatchDataResult<SearchRequest> {
        let filters = PropertyFilters {
            query: params.query.as_deref(),
            min_estimated_value: params.min_estimated_value,
            max_estimated_value: params.max_estimated_value,
            min_equity_percent: params.min_equity_percent,
            property_type: params.property_type.as_deref(),
        };
        Ok(SearchRequest {
            search_criteria: filters.criteria(),
            options: SearchOptions::page(0, 0),
        })
    }

    fn format_response(response: &Value) -> BatchDataResult<String> {
        let total = ResponseShape::classify(response).total();
        Ok(format!("Total properties matching criteria: {}", total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::batchdata::mock::MockApi;
    use crate::domains::tools::definitions::common::{invoke, test_support::text_of};
    use serde_json::json;

    fn body_for(args: Value) -> Value {
        let params: CountPropertiesParams = serde_json::from_value(args).unwrap();
        serde_json::to_value(CountPropertiesTool::build_request(&params).unwrap()).unwrap()
    }

    #[test]
    fn test_no_parameters() {
        assert_eq!(
            body_for(json!({})),
            json!({"searchCriteria": {}, "options": {"skip": 0, "take": 0}})
        );
    }

    #[test]
    fn test_paging_is_forced_to_zero() {
        // Unknown fields such as paging are not part of the count schema.
        let body = body_for(json!({"query": "Denver, CO", "skip": 40, "take": 100}));
        assert_eq!(body["options"], json!({"skip": 0, "take": 0}));
        assert_eq!(body["searchCriteria"], json!({"query": "Denver, CO"}));
    }

    #[test]
    fn test_filters_share_search_rules() {
        let body = body_for(json!({
            "minEstimatedValue": 0,
            "maxEstimatedValue": 750000,
            "minEquityPercent": 40,
            "propertyType": "Condo"
        }));
        assert_eq!(
            body["searchCriteria"],
            json!({
                "valuation": {
                    "estimatedValue": {"max": 750000},
                    "equityPercent": {"min": 40}
                },
                "general": {"propertyTypeDetail": {"equals": "Condo"}}
            })
        );
    }

    #[test]
    fn test_format_has_no_payload() {
        let text = CountPropertiesTool::format_response(&json!({"totalCount": 1532})).unwrap();
        assert_eq!(text, "Total properties matching criteria: 1532");

        let text = CountPropertiesTool::format_response(&json!({"status": "ok"})).unwrap();
        assert_eq!(text, "Total properties matching criteria: 0");
    }

    #[tokio::test]
    async fn test_invoke_counts() {
        let api = MockApi::responding(json!({"total": 87}));
        let result = invoke::<CountPropertiesTool>(&api, &CountPropertiesParams::default()).await;

        assert_eq!(text_of(&result), "Total properties matching criteria: 87");
        let (endpoint, body) = &api.calls()[0];
        assert_eq!(*endpoint, Endpoint::PropertySearch);
        assert_eq!(body["options"]["take"], 0);
    }
}
