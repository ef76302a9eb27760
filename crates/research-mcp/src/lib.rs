//! Research MCP Server
//!
//! A Model Context Protocol (MCP) server for the OpenAlex works API.
//! Enables LLM agents to search academic papers, read abstracts, walk citation
//! networks, and assemble comparison and gap-analysis prompts.
//!
//! # Features
//!
//! - **6 MCP Tools**: search, abstracts, claim extraction, comparison, citation network, research gaps
//! - **Typed upstream model**: OpenAlex works are normalized into a stable record
//! - **Abstract reconstruction**: inverted-index abstracts are rebuilt into plain text
//!
//! # Example
//!
//! ```no_run
//! use research_mcp::{client::OpenAlexClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = OpenAlexClient::new(config)?;
//!
//!     let paper = client.fetch_work("W2741809807").await?;
//!     println!("{}", paper.abstract_text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::OpenAlexClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
