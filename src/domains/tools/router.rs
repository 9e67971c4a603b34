//! Tool Router - builds the rmcp ToolRouter for the STDIO transport.
//!
//! Every route shares the same `PropertyApi` handle; the routes themselves are
//! generated from each tool's `PropertyTool` impl.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::batchdata::PropertyApi;

use super::definitions::common::tool_route;
use super::definitions::{
    AutocompleteAddressTool, CountPropertiesTool, GeocodeAddressTool, LookupPropertyTool,
    ReverseGeocodeTool, SearchByBoundaryTool, SearchPropertiesTool, VerifyAddressTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn PropertyApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(tool_route::<VerifyAddressTool, S>(api.clone()))
        .with_route(tool_route::<AutocompleteAddressTool, S>(api.clone()))
        .with_route(tool_route::<GeocodeAddressTool, S>(api.clone()))
        .with_route(tool_route::<ReverseGeocodeTool, S>(api.clone()))
        .with_route(tool_route::<LookupPropertyTool, S>(api.clone()))
        .with_route(tool_route::<SearchPropertiesTool, S>(api.clone()))
        .with_route(tool_route::<SearchByBoundaryTool, S>(api.clone()))
        .with_route(tool_route::<CountPropertiesTool, S>(api))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::batchdata::mock::MockApi;
    use serde_json::json;

    struct TestServer {}

    fn test_api() -> Arc<dyn PropertyApi> {
        Arc::new(MockApi::responding(json!({})))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        let tools = router.list_all();
        assert_eq!(tools.len(), 8);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"verify-address"));
        assert!(names.contains(&"autocomplete-address"));
        assert!(names.contains(&"geocode-address"));
        assert!(names.contains(&"reverse-geocode"));
        assert!(names.contains(&"lookup-property"));
        assert!(names.contains(&"search-properties"));
        assert!(names.contains(&"search-properties-by-boundary"));
        assert!(names.contains(&"count-properties"));
    }

    #[test]
    fn test_tools_declare_object_schemas() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        for tool in router.list_all() {
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&json!("object")),
                "{} has no object schema",
                tool.name
            );
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let api = test_api();
        let registry = ToolRegistry::new(api.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(api);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
