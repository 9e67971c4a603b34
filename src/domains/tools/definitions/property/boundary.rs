//! Spatial property search.
//!
//! A bounding box needs all four corners and a radius circle needs center and
//! radius; an incomplete set contributes nothing. Both shapes may be sent
//! together. Coordinates are checked for presence only, so `0.0` is a valid
//! latitude or longitude.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::criteria::{
    BoundingBox, DateFloor, GeoAddress, GeoDistance, GeoPoint, Intel, SearchCriteria,
    SearchOptions, SearchRequest, TextGeoPoint,
};
use crate::domains::batchdata::{BatchDataResult, Endpoint, response};
use crate::domains::tools::definitions::common::{PropertyTool, non_empty};
use crate::domains::tools::definitions::numbers;

fn default_take() -> u32 {
    10
}

/// Parameters for the boundary search tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchByBoundaryParams {
    /// Northwest bounding box latitude
    #[serde(default)]
    pub nw_latitude: Option<f64>,

    /// Northwest bounding box longitude
    #[serde(default)]
    pub nw_longitude: Option<f64>,

    /// Southeast bounding box latitude
    #[serde(default)]
    pub se_latitude: Option<f64>,

    /// Southeast bounding box longitude
    #[serde(default)]
    pub se_longitude: Option<f64>,

    /// Center point latitude for radius search
    #[serde(default)]
    pub center_latitude: Option<f64>,

    /// Center point longitude for radius search
    #[serde(default)]
    pub center_longitude: Option<f64>,

    /// Search radius in kilometers
    #[serde(default)]
    pub radius_kilometers: Option<f64>,

    /// Minimum last sold date (YYYY-MM-DD)
    #[serde(default)]
    pub min_sold_date: Option<String>,

    /// Number of results to skip
    #[serde(default, deserialize_with = "numbers::count")]
    pub skip: u32,

    /// Number of results to return
    #[serde(default = "default_take", deserialize_with = "numbers::count")]
    pub take: u32,
}

impl SearchByBoundaryParams {
    fn bounding_box(&self) -> Option<BoundingBox> {
        let (nw_lat, nw_lon, se_lat, se_lon) = (
            self.nw_latitude?,
            self.nw_longitude?,
            self.se_latitude?,
            self.se_longitude?,
        );
        Some(BoundingBox {
            nw_geo_point: text_point(nw_lat, nw_lon),
            se_geo_point: text_point(se_lat, se_lon),
        })
    }

    fn radius(&self) -> Option<GeoDistance> {
        Some(GeoDistance {
            geo_point: GeoPoint {
                latitude: self.center_latitude?,
                longitude: self.center_longitude?,
            },
            distance_kilometers: self.radius_kilometers?,
        })
    }

    fn address(&self) -> Option<GeoAddress> {
        let (geo_location_bounding_box, geo_location_distance) =
            (self.bounding_box(), self.radius());
        if geo_location_bounding_box.is_none() && geo_location_distance.is_none() {
            return None;
        }
        Some(GeoAddress {
            geo_location_bounding_box,
            geo_location_distance,
        })
    }

    fn intel(&self) -> Option<Intel> {
        non_empty(self.min_sold_date.as_deref()).map(|min_date| Intel {
            last_sold_date: DateFloor {
                min_date: min_date.to_string(),
            },
        })
    }
}

fn text_point(latitude: f64, longitude: f64) -> TextGeoPoint {
    TextGeoPoint {
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
    }
}

/// Boundary search tool.
pub struct SearchByBoundaryTool;

impl PropertyTool for SearchByBoundaryTool {
    type Params = SearchByBoundaryParams;
    type Request = SearchRequest;

    const NAME: &'static str = "search-properties-by-boundary";
    const DESCRIPTION: &'static str = "Search properties inside a bounding box (all four corners) and/or within a radius of a center point, optionally filtered by minimum last sold date.";
    const ENDPOINT: Endpoint = Endpoint::PropertySearch;
    const FAILURE_CONTEXT: &'static str = "searching properties by boundary";

    fn build_request(params: &SearchByBoundaryParams) -> BatchDataResult<SearchRequest> {
        Ok(SearchRequest {
            search_criteria: SearchCriteria {
                address: params.address(),
                intel: params.intel(),
                ..SearchCriteria::default()
            },
            options: SearchOptions::page(params.skip, params.take),
        })
    }

    fn format_response(response: &Value) -> BatchDataResult<String> {
        response::with_total(response, |total| {
            format!("Found {} properties in specified boundary:", total)
        })
    }
}
