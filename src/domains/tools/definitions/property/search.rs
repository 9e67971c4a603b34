//! Property search tool.
//!
//! Combines up to five independent filter groups (location query, comparable
//! address, valuation range, equity floor, property type) with four independent
//! comparable-property toggles. Each toggle gates its own bounds: bounds without
//! the toggle are ignored, and a toggle without bounds still sends its flag.
//!
//! Filter bounds use a truthy check (`minEstimatedValue: 0` is dropped) while
//! comparison bounds use a defined check (`minBedrooms: 0` is sent). Existing
//! consumers of the API depend on this split.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::criteria::{
    BathroomComparison, BedroomComparison, DistanceComparison, PropertyFilters, SearchCriteria,
    SearchOptions, SearchRequest, YearBuiltComparison, comp_address,
};
use crate::domains::batchdata::{BatchDataResult, Endpoint, response};
use crate::domains::tools::definitions::common::{PropertyTool, non_zero};
use crate::domains::tools::definitions::numbers;

fn default_take() -> u32 {
    10
}

/// Parameters for the property search tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPropertiesParams {
    /// Location query (city, state, etc.)
    #[serde(default)]
    pub query: Option<String>,

    /// Comparison property street address
    #[serde(default)]
    pub comp_street: Option<String>,

    /// Comparison property city
    #[serde(default)]
    pub comp_city: Option<String>,

    /// Comparison property state
    #[serde(default)]
    pub comp_state: Option<String>,

    /// Comparison property ZIP
    #[serde(default)]
    pub comp_zip: Option<String>,

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

    /// Use distance-based comparison
    #[serde(default)]
    pub use_distance: bool,

    /// Distance in miles for comparison
    #[serde(default)]
    pub distance_miles: Option<f64>,

    /// Use bedroom count in comparison
    #[serde(default)]
    pub use_bedrooms: bool,

    /// Minimum bedrooms (relative to comp property)
    #[serde(default, deserialize_with = "numbers::optional_int")]
    pub min_bedrooms: Option<i32>,

    /// Maximum bedrooms (relative to comp property)
    #[serde(default, deserialize_with = "numbers::optional_int")]
    pub max_bedrooms: Option<i32>,

    /// Use bathroom count in comparison
    #[serde(default)]
    pub use_bathrooms: bool,

    /// Minimum bathrooms (relative to comp property)
    #[serde(default)]
    pub min_bathrooms: Option<f64>,

    /// Maximum bathrooms (relative to comp property)
    #[serde(default)]
    pub max_bathrooms: Option<f64>,

    /// Use year built in comparison
    #[serde(default)]
    pub use_year_built: bool,

    /// Minimum year built (relative to comp property)
    #[serde(default, deserialize_with = "numbers::optional_int")]
    pub min_year_built: Option<i32>,

    /// Maximum year built (relative to comp property)
    #[serde(default, deserialize_with = "numbers::optional_int")]
    pub max_year_built: Option<i32>,

    /// Number of results to skip
    #[serde(default, deserialize_with = "numbers::count")]
    pub skip: u32,

    /// Number of results to return
    #[serde(default = "default_take", deserialize_with = "numbers::count")]
    pub take: u32,

    /// Include skip trace data
    #[serde(default)]
    pub skip_trace: bool,
}

impl SearchPropertiesParams {
    fn filters(&self) -> PropertyFilters<'_> {
        PropertyFilters {
            query: self.query.as_deref(),
            min_estimated_value: self.min_estimated_value,
            max_estimated_value: self.max_estimated_value,
            min_equity_percent: self.min_equity_percent,
            property_type: self.property_type.as_deref(),
        }
    }

    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            comp_address: comp_address(
                self.comp_street.as_deref(),
                self.comp_city.as_deref(),
                self.comp_state.as_deref(),
                self.comp_zip.as_deref(),
            ),
            ..self.filters().criteria()
        }
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            distance: self.use_distance.then(|| DistanceComparison {
                use_distance: true,
                distance_miles: non_zero(self.distance_miles),
            }),
            bedrooms: self.use_bedrooms.then_some(BedroomComparison {
                use_bedrooms: true,
                min_bedrooms: self.min_bedrooms,
                max_bedrooms: self.max_bedrooms,
            }),
            bathrooms: self.use_bathrooms.then_some(BathroomComparison {
                use_bathrooms: true,
                min_bathrooms: self.min_bathrooms,
                max_bathrooms: self.max_bathrooms,
            }),
            year_built: self.use_year_built.then_some(YearBuiltComparison {
                use_year_built: true,
                min_year_built: self.min_year_built,
                max_year_built: self.max_year_built,
            }),
            skip_trace: self.skip_trace.then_some(true),
            ..SearchOptions::page(self.skip, self.take)
        }
    }
}

/// Property search tool.
pub struct SearchPropertiesTool;

impl PropertyTool for SearchPropertiesTool {
    type Params = SearchPropertiesParams;
    type Request = SearchRequest;

    const NAME: &'static str = "search-properties";
    const DESCRIPTION: &'static str = "Search properties by location, valuation, equity and property type, optionally as comparables of a subject property (distance, bedrooms, bathrooms, year built). Returns the match count followed by the raw results.";
    const ENDPOINT: Endpoint = Endpoint::PropertySearch;
    const FAILURE_CONTEXT: &'static str = "searching properties";

    fn build_request(params: &SearchPropertiesParams) -> BatchDataResult<SearchRequest> {
        Ok(SearchRequest {
            search_criteria: params.criteria(),
            options: params.options(),
        })
    }

    fn format_response(response: &Value) -> BatchDataResult<String> {
        response::with_total(response, |total| {
            format!("Found {} properties matching criteria:", total)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::batchdata::mock::MockApi;
    use crate::domains::tools::definitions::common::{invoke, test_support::text_of};
    use serde_json::json;

    fn body_for(args: Value) -> Value {
        let params: SearchPropertiesParams = serde_json::from_value(args).unwrap();
        serde_json::to_value(SearchPropertiesTool::build_request(&params).unwrap()).unwrap()
    }

    #[test]
    fn test_no_parameters() {
        assert_eq!(
            body_for(json!({})),
            json!({"searchCriteria": {}, "options": {"skip": 0, "take": 10}})
        );
    }

    #[test]
    fn test_zero_estimated_value_is_dropped() {
        let body = body_for(json!({"minEstimatedValue": 0}));
        assert!(body["searchCriteria"].get("valuation").is_none());

        let body = body_for(json!({"minEstimatedValue": 0, "maxEstimatedValue": 400000}));
        assert_eq!(
            body["searchCriteria"]["valuation"],
            json!({"estimatedValue": {"max": 400000}})
        );
    }

    #[test]
    fn test_zero_bedrooms_is_sent() {
        let body = body_for(json!({"useBedrooms": true, "minBedrooms": 0}));
        assert_eq!(body["options"]["useBedrooms"], json!(true));
        assert_eq!(body["options"]["minBedrooms"], json!(0));
        assert!(body["options"].get("maxBedrooms").is_none());
    }

    #[test]
    fn test_toggle_without_bounds_sends_flag_only() {
        let body = body_for(json!({"useYearBuilt": true}));
        assert_eq!(
            body["options"],
            json!({"skip": 0, "take": 10, "useYearBuilt": true})
        );
    }

    #[test]
    fn test_bounds_without_toggle_are_ignored() {
        let body = body_for(json!({
            "minBedrooms": 1,
            "maxBathrooms": 2.5,
            "distanceMiles": 3,
            "minYearBuilt": -5
        }));
        assert_eq!(body["options"], json!({"skip": 0, "take": 10}));
    }

    #[test]
    fn test_distance_uses_truthy_check() {
        let body = body_for(json!({"useDistance": true, "distanceMiles": 0}));
        assert_eq!(body["options"]["useDistance"], json!(true));
        assert!(body["options"].get("distanceMiles").is_none());

        let body = body_for(json!({"useDistance": true, "distanceMiles": 1.5}));
        assert_eq!(body["options"]["distanceMiles"], json!(1.5));
    }

    #[test]
    fn test_full_comparable_search() {
        let body = body_for(json!({
            "query": "Austin, TX",
            "compStreet": "9 Oak Ln",
            "compCity": "Austin",
            "compState": "TX",
            "compZip": "78701",
            "minEstimatedValue": 200000,
            "maxEstimatedValue": 600000,
            "minEquityPercent": 30,
            "propertyType": "Single Family",
            "useBathrooms": true,
            "minBathrooms": -1,
            "maxBathrooms": 1.5,
            "skip": 20,
            "take": 5,
            "skipTrace": true
        }));
        assert_eq!(
            body,
            json!({
                "searchCriteria": {
                    "query": "Austin, TX",
                    "compAddress": {"street": "9 Oak Ln", "city": "Austin", "state": "TX", "zip": "78701"},
                    "valuation": {
                        "estimatedValue": {"min": 200000, "max": 600000},
                        "equityPercent": {"min": 30}
                    },
                    "general": {"propertyTypeDetail": {"equals": "Single Family"}}
                },
                "options": {
                    "skip": 20,
                    "take": 5,
                    "useBathrooms": true,
                    "minBathrooms": -1,
                    "maxBathrooms": 1.5,
                    "skipTrace": true
                }
            })
        );
    }

    #[test]
    fn test_whole_floats_fill_integer_fields() {
        let body = body_for(json!({"useBedrooms": true, "minBedrooms": 2.0, "take": 5.0}));
        assert_eq!(
            body["options"],
            json!({"skip": 0, "take": 5, "useBedrooms": true, "minBedrooms": 2})
        );

        let rejected = serde_json::from_value::<SearchPropertiesParams>(json!({"minBedrooms": 1.5}));
        assert!(rejected.is_err());
    }

    #[test]
    fn test_whole_money_is_sent_without_fraction() {
        let params: SearchPropertiesParams =
            serde_json::from_value(json!({"minEstimatedValue": 200000, "maxBathrooms": 2.5}))
                .unwrap();
        let params = SearchPropertiesParams {
            use_bathrooms: true,
            ..params
        };
        let wire =
            serde_json::to_string(&SearchPropertiesTool::build_request(&params).unwrap()).unwrap();
        assert!(wire.contains(r#""estimatedValue":{"min":200000}"#));
        assert!(wire.contains(r#""maxBathrooms":2.5"#));
        assert!(!wire.contains("200000.0"));
    }

    #[test]
    fn test_comp_fields_without_street_are_ignored() {
        let body = body_for(json!({"compCity": "Austin", "compZip": "78701"}));
        assert!(body["searchCriteria"].get("compAddress").is_none());
    }

    #[test]
    fn test_format_counts_properties_array() {
        let text = SearchPropertiesTool::format_response(&json!({"properties": [1, 2, 3]})).unwrap();
        assert!(text.starts_with("Found 3 properties matching criteria:"));
    }

    #[tokio::test]
    async fn test_invoke_posts_to_search_endpoint() {
        let api = MockApi::responding(json!({"totalCount": 12, "properties": []}));
        let params = SearchPropertiesParams {
            take: 10,
            ..Default::default()
        };
        let result = invoke::<SearchPropertiesTool>(&api, &params).await;

        assert!(text_of(&result).starts_with("Found 12 properties matching criteria:\n\n"));
        assert_eq!(api.calls()[0].0, Endpoint::PropertySearch);
    }
}
