//! Search criteria documents for `/property/search/sync`.
//!
//! Every group is an `Option` built by its own function; a group is serialized
//! only when at least one parameter that feeds it was supplied, so callers never
//! see `null` leaves or empty objects for features they did not ask for.

use serde::Serialize;

use crate::domains::tools::definitions::common::{non_empty, non_zero};
use crate::domains::tools::definitions::numbers;

/// `searchCriteria` section of a property search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp_address: Option<CompAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuation: Option<Valuation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<General>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<GeoAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intel: Option<Intel>,
}

/// Subject property used for comparable searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompAddress {
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equity_percent: Option<Floor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "numbers::compact_option")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "numbers::compact_option")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Floor {
    #[serde(serialize_with = "numbers::compact")]
    pub min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct General {
    pub property_type_detail: Equals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equals {
    pub equals: String,
}

/// Spatial filters. Bounding box and radius may both be present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_location_bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_location_distance: Option<GeoDistance>,
}

/// Bounding box corners. The API takes these coordinates as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub nw_geo_point: TextGeoPoint,
    pub se_geo_point: TextGeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextGeoPoint {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoDistance {
    pub geo_point: GeoPoint,
    #[serde(serialize_with = "numbers::compact")]
    pub distance_kilometers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(serialize_with = "numbers::compact")]
    pub latitude: f64,
    #[serde(serialize_with = "numbers::compact")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intel {
    pub last_sold_date: DateFloor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFloor {
    pub min_date: String,
}

/// Full `/property/search/sync` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_criteria: SearchCriteria,
    pub options: SearchOptions,
}

/// `options` section: paging plus optional comparable-property toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub skip: u32,
    pub take: u32,

    #[serde(flatten)]
    pub distance: Option<DistanceComparison>,

    #[serde(flatten)]
    pub bedrooms: Option<BedroomComparison>,

    #[serde(flatten)]
    pub bathrooms: Option<BathroomComparison>,

    #[serde(flatten)]
    pub year_built: Option<YearBuiltComparison>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_trace: Option<bool>,
}

impl SearchOptions {
    /// Paging only.
    pub fn page(skip: u32, take: u32) -> Self {
        Self {
            skip,
            take,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceComparison {
    pub use_distance: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "numbers::compact_option")]
    pub distance_miles: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedroomComparison {
    pub use_bedrooms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BathroomComparison {
    pub use_bathrooms: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "numbers::compact_option")]
    pub min_bathrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "numbers::compact_option")]
    pub max_bathrooms: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBuiltComparison {
    pub use_year_built: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year_built: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year_built: Option<i32>,
}

/// Location and valuation filters shared by search and count.
///
/// Numeric bounds here use a truthy check: `0` counts as not supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyFilters<'a> {
    pub query: Option<&'a str>,
    pub min_estimated_value: Option<f64>,
    pub max_estimated_value: Option<f64>,
    pub min_equity_percent: Option<f64>,
    pub property_type: Option<&'a str>,
}

impl PropertyFilters<'_> {
    /// Criteria with only these filters applied.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: non_empty(self.query).map(str::to_string),
            valuation: valuation(
                self.min_estimated_value,
                self.max_estimated_value,
                self.min_equity_percent,
            ),
            general: property_type(self.property_type),
            ..SearchCriteria::default()
        }
    }
}

/// `valuation` group, or `None` when no bound is truthy.
pub fn valuation(min: Option<f64>, max: Option<f64>, min_equity_percent: Option<f64>) -> Option<Valuation> {
    let (min, max) = (non_zero(min), non_zero(max));
    let estimated_value = (min.is_some() || max.is_some()).then_some(Range { min, max });
    let equity_percent = non_zero(min_equity_percent).map(|min| Floor { min });

    if estimated_value.is_none() && equity_percent.is_none() {
        return None;
    }
    Some(Valuation {
        estimated_value,
        equity_percent,
    })
}

/// `general.propertyTypeDetail.equals` when a property type was given.
pub fn property_type(property_type: Option<&str>) -> Option<General> {
    non_empty(property_type).map(|equals| General {
        property_type_detail: Equals {
            equals: equals.to_string(),
        },
    })
}

/// Comparable-property address, keyed on a non-empty street.
pub fn comp_address(
    street: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zip: Option<&str>,
) -> Option<CompAddress> {
    non_empty(street).map(|street| CompAddress {
        street: street.to_string(),
        city: city.map(str::to_string),
        state: state.map(str::to_string),
        zip: zip.map(str::to_string),
    })
}
