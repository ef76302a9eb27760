//! Paper search tool.

use serde_json::json;

use super::{McpTool, ToolContext, clamp_count, require_non_empty};
use crate::config::limits;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{ResponseFormat, SearchPapersInput};

/// Keyword search over OpenAlex works.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search for academic papers on OpenAlex. Returns titles, authors, year, \
         citation counts, URLs and IDs to use with the other tools."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Research topic or keywords to search for"
                },
                "maxResults": {
                    "type": "integer",
                    "default": limits::DEFAULT_SEARCH_RESULTS,
                    "minimum": 1,
                    "maximum": limits::MAX_PAGE_RESULTS,
                    "description": "Maximum number of papers to return"
                },
                "yearFrom": {
                    "type": "integer",
                    "description": "Only include papers from this year onwards"
                },
                "sortBy": {
                    "type": "string",
                    "enum": ["cited_by_count", "publication_date", "relevance_score"],
                    "default": "cited_by_count",
                    "description": "Sort key, always descending"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        let query = require_non_empty("query", &params.query)?;
        let max_results = clamp_count(params.max_results, limits::MAX_PAGE_RESULTS);

        let papers = ctx
            .client
            .search_works(query, max_results, params.sort_by, params.year_from)
            .await?;

        tracing::info!(query, found = papers.len(), "Search completed");

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_search_results(query, &papers)),
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "query": query,
                "total": papers.len(),
                "papers": formatters::compact_papers(&papers)
            }))?),
        }
    }
}
