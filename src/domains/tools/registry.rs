//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - Tool metadata for listing
//! - Name-based dispatch used by the HTTP transport

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;
use tracing::warn;

use crate::domains::batchdata::PropertyApi;

use super::ToolError;
use super::definitions::common::{dispatch, to_tool};
use super::definitions::{
    AutocompleteAddressTool, CountPropertiesTool, GeocodeAddressTool, LookupPropertyTool,
    PropertyTool, ReverseGeocodeTool, SearchByBoundaryTool, SearchPropertiesTool,
    VerifyAddressTool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    api: Arc<dyn PropertyApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(api: Arc<dyn PropertyApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            VerifyAddressTool::NAME,
            AutocompleteAddressTool::NAME,
            GeocodeAddressTool::NAME,
            ReverseGeocodeTool::NAME,
            LookupPropertyTool::NAME,
            SearchPropertiesTool::NAME,
            SearchByBoundaryTool::NAME,
            CountPropertiesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<VerifyAddressTool>(),
            to_tool::<AutocompleteAddressTool>(),
            to_tool::<GeocodeAddressTool>(),
            to_tool::<ReverseGeocodeTool>(),
            to_tool::<LookupPropertyTool>(),
            to_tool::<SearchPropertiesTool>(),
            to_tool::<SearchByBoundaryTool>(),
            to_tool::<CountPropertiesTool>(),
        ]
    }

    /// Dispatch a tool call by name and return the serialized result envelope.
    ///
    /// Only unknown names and malformed arguments are errors here; a failed
    /// API call still yields an `isError` envelope.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let api = self.api.as_ref();
        let result = match name {
            VerifyAddressTool::NAME => dispatch::<VerifyAddressTool>(api, arguments).await?,
            AutocompleteAddressTool::NAME => {
                dispatch::<AutocompleteAddressTool>(api, arguments).await?
            }
            GeocodeAddressTool::NAME => dispatch::<GeocodeAddressTool>(api, arguments).await?,
            ReverseGeocodeTool::NAME => dispatch::<ReverseGeocodeTool>(api, arguments).await?,
            LookupPropertyTool::NAME => dispatch::<LookupPropertyTool>(api, arguments).await?,
            SearchPropertiesTool::NAME => dispatch::<SearchPropertiesTool>(api, arguments).await?,
            SearchByBoundaryTool::NAME => dispatch::<SearchByBoundaryTool>(api, arguments).await?,
            CountPropertiesTool::NAME => dispatch::<CountPropertiesTool>(api, arguments).await?,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };

        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
    }
}
