//! MCP Server implementation and lifecycle management.
//!
//! This module contains the server handler that exposes the BatchData tools
//! over MCP. It owns the single `PropertyApi` handle every tool shares.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool implements `PropertyTool`:
//! - a parameters struct (schema for rmcp)
//! - a query builder producing the request document
//! - an optional response formatter
//!
//! The ToolRouter is built in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::batchdata::{BatchDataClient, PropertyApi};
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "BatchData real-estate tools. Address tools (verify-address, \
autocomplete-address, geocode-address, reverse-geocode) normalize and locate US addresses. \
Property tools (lookup-property, search-properties, search-properties-by-boundary, \
count-properties) return property records and match counts. Use count-properties to size \
a search before paging through it with skip/take.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// BatchData API shared by every tool.
    api: Arc<dyn PropertyApi>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server backed by the real BatchData API.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let api: Arc<dyn PropertyApi> = Arc::new(BatchDataClient::new(&config.batchdata)?);
        Ok(Self::with_api(config, api))
    }

    /// Create a server backed by an arbitrary `PropertyApi`.
    pub fn with_api(config: Config, api: Arc<dyn PropertyApi>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(api.clone()),
            config: Arc::new(config),
            api,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        let registry = ToolRegistry::new(self.api.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BatchDataConfig;
    use crate::domains::batchdata::mock::MockApi;
    use serde_json::json;

    fn test_config() -> Config {
        Config {
            batchdata: BatchDataConfig::new("test-key"),
            ..Config::default()
        }
    }

    fn test_server(api: MockApi) -> McpServer {
        McpServer::with_api(test_config(), Arc::new(api))
    }

    #[test]
    fn test_new_with_real_client() {
        let server = McpServer::new(test_config()).unwrap();
        assert_eq!(server.name(), "batchdata-property-server");
        assert_eq!(server.list_tools().len(), 8);
    }

    #[test]
    fn test_get_info_advertises_tools_only() {
        let info = test_server(MockApi::responding(json!({}))).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "batchdata-property-server");
        assert!(info.instructions.unwrap().contains("count-properties"));
    }

    #[test]
    fn test_list_tools_shape() {
        let tools = test_server(MockApi::responding(json!({}))).list_tools();
        let lookup = tools
            .iter()
            .find(|t| t["name"] == "lookup-property")
            .unwrap();
        assert!(lookup["description"].is_string());
        assert_eq!(lookup["inputSchema"]["type"], "object");
        assert!(
            lookup["inputSchema"]["required"]
                .as_array()
                .unwrap()
                .contains(&json!("state"))
        );
    }

    #[tokio::test]
    async fn test_call_tool_through_registry() {
        let server = test_server(MockApi::responding(json!({"totalCount": 3})));
        let result = server
            .call_tool("search-properties", json!({"query": "Miami, FL"}))
            .await
            .unwrap();

        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Found 3 properties matching criteria:"));
    }
}
