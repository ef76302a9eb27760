//! MCP server: owns the registered tools and runs one transport.

pub mod handler;
pub mod stdio;
pub mod transport;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::OpenAlexClient;
use crate::tools::{self, McpTool, ToolContext};

/// Where the server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listen {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    Stdio,
    /// `POST /mcp` on the given address.
    Http(SocketAddr),
}

impl Listen {
    /// HTTP on all interfaces at `port`.
    #[must_use]
    pub fn http(port: u16) -> Self {
        Self::Http(SocketAddr::from(([0, 0, 0, 0], port)))
    }
}

/// MCP server for OpenAlex.
pub struct McpServer {
    tools: Vec<Box<dyn McpTool>>,
    ctx: ToolContext,
}

impl McpServer {
    /// Register every tool over a shared client.
    #[must_use]
    pub fn new(client: OpenAlexClient) -> Self {
        Self { tools: tools::register_all_tools(), ctx: ToolContext::new(Arc::new(client)) }
    }

    /// Serve until the transport closes: EOF on stdin, or Ctrl-C for HTTP.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure or if the HTTP address cannot be bound.
    pub async fn serve(self, listen: Listen) -> anyhow::Result<()> {
        let tool_names: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        tracing::info!(?listen, tools = ?tool_names, "Starting MCP server");

        match listen {
            Listen::Stdio => stdio::run_stdio(self.tools, self.ctx).await,
            Listen::Http(addr) => {
                let listener = tokio::net::TcpListener::bind(addr).await?;
                tracing::info!(%addr, "HTTP server listening");

                axum::serve(listener, transport::create_router(self.tools, self.ctx))
                    .with_graceful_shutdown(shutdown_signal())
                    .await?;

                tracing::info!("HTTP server shut down");
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("tools", &self.tools.len())
            .field("client", &self.ctx.client)
            .finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
