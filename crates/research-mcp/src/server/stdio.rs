//! Stdio transport for MCP protocol.
//!
//! Handles newline-delimited JSON-RPC 2.0 over stdin/stdout. Requests are
//! processed one at a time, in arrival order.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::tools::{McpTool, ToolContext};

use super::handler::handle_request;
use super::transport::{JsonRpcRequest, JsonRpcResponse};

/// Handle MCP protocol over the process's stdin and stdout.
pub async fn run_stdio(tools: Vec<Box<dyn McpTool>>, ctx: ToolContext) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();

    tracing::info!("MCP stdio server ready, waiting for requests...");

    serve_lines(reader, writer, &tools, &ctx).await
}

/// Serve JSON-RPC messages read line by line until EOF.
pub async fn serve_lines<R, W>(
    mut reader: R,
    mut writer: W,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable JSON-RPC message");
                let response = JsonRpcResponse::error(None, -32700, format!("Parse error: {e}"));
                write_response(&mut writer, &response).await?;
                continue;
            }
        };

        tracing::debug!(method = %request.method, "Received request");

        if let Some(response) = handle_request(&request, tools, ctx).await {
            write_response(&mut writer, &response).await?;
        }
    }

    Ok(())
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response_json = serde_json::to_string(response)?;
    writer.write_all(response_json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
