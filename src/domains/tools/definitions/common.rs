//! Shared plumbing for every BatchData tool.
//!
//! A tool only describes itself ([`PropertyTool`]): its parameters, how they map
//! to a request document and how the response is rendered. Running it, and
//! turning the outcome into an MCP result envelope, happens once here.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domains::batchdata::{BatchDataResult, Endpoint, PropertyApi, response};
use crate::domains::tools::ToolError;

/// A single BatchData operation exposed as an MCP tool.
pub trait PropertyTool: Send + Sync + 'static {
    /// Validated parameter bag.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Request document sent to [`Self::ENDPOINT`].
    type Request: Serialize;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Endpoint the request is posted to.
    const ENDPOINT: Endpoint;

    /// Completes "Error ..." in failure messages, e.g. "verifying address".
    const FAILURE_CONTEXT: &'static str;

    /// Translate parameters into the request document.
    fn build_request(params: &Self::Params) -> BatchDataResult<Self::Request>;

    /// Render the raw response as the tool's text output.
    fn format_response(response: &Value) -> BatchDataResult<String> {
        response::pretty(response)
    }
}

/// Create a Tool model for `T` (metadata).
pub fn to_tool<T: PropertyTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Run `T` once and wrap the outcome in a result envelope.
///
/// Never fails: every error from building, calling or formatting becomes an
/// `isError` envelope.
pub async fn invoke<T: PropertyTool>(api: &dyn PropertyApi, params: &T::Params) -> CallToolResult {
    info!(tool = T::NAME, endpoint = T::ENDPOINT.path(), "Tool called");
    envelope(T::FAILURE_CONTEXT, run::<T>(api, params).await)
}

async fn run<T: PropertyTool>(api: &dyn PropertyApi, params: &T::Params) -> BatchDataResult<String> {
    let request = serde_json::to_value(T::build_request(params)?)?;
    let response = api.execute(T::ENDPOINT, &request).await?;
    T::format_response(&response)
}

/// Map a tool outcome to the result envelope.
///
/// Success carries exactly one text item and no `isError`; failure carries
/// `"Error <context>: <message>"` with `isError: true`.
pub fn envelope(context: &str, outcome: BatchDataResult<String>) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult {
            content: vec![Content::text(text)],
            structured_content: None,
            is_error: None,
            meta: None,
        },
        Err(e) => {
            let message = format!("Error {}: {}", context, e);
            warn!("{}", message);
            CallToolResult::error(vec![Content::text(message)])
        }
    }
}

/// Deserialize raw arguments and invoke `T` (HTTP dispatch path).
pub async fn dispatch<T: PropertyTool>(
    api: &dyn PropertyApi,
    arguments: Value,
) -> Result<CallToolResult, ToolError> {
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    Ok(invoke::<T>(api, &params).await)
}

/// Create a ToolRoute for `T` (STDIO transport).
pub fn tool_route<T, S>(api: Arc<dyn PropertyApi>) -> ToolRoute<S>
where
    T: PropertyTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let api = api.clone();
        async move {
            let params: T::Params = serde_json::from_value(Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

            Ok(invoke::<T>(api.as_ref(), &params).await)
        }
        .boxed()
    })
}

/// Present and non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Present and non-zero.
pub(crate) fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n != 0.0 && !n.is_nan())
}

#[cfg(test)]
pub(crate) mod test_support {
    use rmcp::model::{CallToolResult, RawContent};

    /// Text of the single content item.
    pub fn text_of(result: &CallToolResult) -> String {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
