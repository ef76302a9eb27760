//! JSON-RPC method dispatch shared by every transport.

use serde_json::json;

use super::transport::{JsonRpcRequest, JsonRpcResponse, McpToolInfo};
use crate::tools::{McpTool, ToolContext};

/// Protocol version announced when the client does not ask for one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Handle one JSON-RPC message.
///
/// Returns `None` for notifications, which must not be answered.
pub async fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> Option<JsonRpcResponse> {
    let is_notification = req.id.is_none();

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(req.id.clone(), &req.params),
        "notifications/initialized" | "initialized" | "notifications/cancelled" => {
            if is_notification {
                return None;
            }
            JsonRpcResponse::success(req.id.clone(), json!({}))
        }
        "tools/list" => handle_tools_list(req.id.clone(), tools),
        "tools/call" => handle_tools_call(req.id.clone(), &req.params, tools, ctx).await,
        "ping" => JsonRpcResponse::success(req.id.clone(), json!({})),
        _ => {
            if is_notification {
                tracing::debug!(method = %req.method, "Ignoring unknown notification");
                return None;
            }
            JsonRpcResponse::error(
                req.id.clone(),
                -32601,
                format!("Method not found: {}", req.method),
            )
        }
    };

    Some(response)
}

fn handle_initialize(id: Option<serde_json::Value>, params: &serde_json::Value) -> JsonRpcResponse {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    tracing::info!(protocol_version, "MCP initialize");

    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "research-mcp",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(id: Option<serde_json::Value>, tools: &[Box<dyn McpTool>]) -> JsonRpcResponse {
    let tool_list: Vec<McpToolInfo> = tools
        .iter()
        .map(|t| McpToolInfo {
            name: t.name().to_string(),
            description: t.description().to_string(),
            input_schema: t.input_schema(),
        })
        .collect();

    JsonRpcResponse::success(id, json!({ "tools": tool_list }))
}

async fn handle_tools_call(
    id: Option<serde_json::Value>,
    params: &serde_json::Value,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> JsonRpcResponse {
    let tool_name = match params.get("name").and_then(|v| v.as_str()) {
        Some(name) => name,
        None => {
            return JsonRpcResponse::error(id, -32602, "Missing 'name' parameter");
        }
    };

    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    let tool = match tools.iter().find(|t| t.name() == tool_name) {
        Some(t) => t,
        None => {
            return JsonRpcResponse::error(id, -32602, format!("Tool not found: {tool_name}"));
        }
    };

    tracing::info!(tool = %tool_name, "Executing tool");

    // Tool failures are results, not protocol errors: the model reads the text.
    let (text, is_error) = match tool.execute(ctx, arguments).await {
        Ok(text) => (text, false),
        Err(e) => {
            tracing::error!(tool = %tool_name, error = %e, "Tool execution failed");
            (e.to_user_message(), true)
        }
    };

    JsonRpcResponse::success(
        id,
        json!({
            "content": [{
                "type": "text",
                "text": text
            }],
            "isError": is_error
        }),
    )
}
