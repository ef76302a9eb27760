//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates input parameters
//! 2. Calls the OpenAlex client (sequentially, never fanned out)
//! 3. Formats results as one text block for the calling model

mod abstracts;
mod analysis;
mod networks;
mod search;

pub use abstracts::{ExtractClaimsTool, GetPaperAbstractTool};
pub use analysis::{ComparePapersTool, FindResearchGapsTool};
pub use networks::CitationNetworkTool;
pub use search::SearchPapersTool;

use std::sync::Arc;

use crate::client::{OpenAlexClient, is_valid_work_id, resolve_work_id};
use crate::error::{ToolError, ToolResult};

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<OpenAlexClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<OpenAlexClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Lookup tools (2)
        Box::new(search::SearchPapersTool),
        Box::new(abstracts::GetPaperAbstractTool),
        // Prompt builders (3)
        Box::new(abstracts::ExtractClaimsTool),
        Box::new(analysis::ComparePapersTool),
        Box::new(analysis::FindResearchGapsTool),
        // Network tools (1)
        Box::new(networks::CitationNetworkTool),
    ]
}

/// Reject blank string arguments.
fn require_non_empty<'a>(field: &str, value: &'a str) -> ToolResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::validation(field, "cannot be empty"));
    }
    Ok(trimmed)
}

/// Reject paper references that do not resolve to a work key.
fn require_work_id<'a>(field: &str, value: &'a str) -> ToolResult<&'a str> {
    let trimmed = require_non_empty(field, value)?;
    if !is_valid_work_id(&resolve_work_id(trimmed)) {
        return Err(ToolError::validation(field, format!("'{trimmed}' is not an OpenAlex work ID")));
    }
    Ok(trimmed)
}

/// Clamp a requested count into `1..=max`.
fn clamp_count(requested: u32, max: u32) -> u32 {
    requested.clamp(1, max)
}
