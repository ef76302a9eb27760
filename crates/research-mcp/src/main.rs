//! Research MCP Server - Entry Point
//!
//! Provides both stdio (for desktop MCP clients) and HTTP transports.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_mcp::{
    OpenAlexClient,
    config::Config,
    server::{Listen, McpServer},
};

#[derive(Parser, Debug)]
#[command(name = "research-mcp")]
#[command(about = "MCP server for the OpenAlex academic paper API")]
#[command(version)]
struct Cli {
    /// Contact email for the OpenAlex polite pool (optional)
    #[arg(long, env = "OPENALEX_MAILTO")]
    mailto: Option<String>,

    /// Override the OpenAlex API base URL
    #[arg(long, env = "OPENALEX_BASE_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30", env = "OPENALEX_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// Streamable HTTP
    Http,
}

/// Logs go to stderr; stdout carries the stdio JSON-RPC stream.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting research MCP server"
    );

    let mut config = Config::new(cli.mailto.filter(|m| !m.trim().is_empty()))
        .with_request_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }

    let client = OpenAlexClient::new(config)?;
    let server = McpServer::new(client);

    let listen = match cli.transport {
        Transport::Stdio => Listen::Stdio,
        Transport::Http => Listen::http(cli.port),
    };

    server.serve(listen).await
}
