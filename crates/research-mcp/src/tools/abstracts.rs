//! Single-paper tools: get_paper_abstract, extract_claims.

use serde_json::json;

use super::{McpTool, ToolContext, require_work_id};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::PaperIdInput;

fn paper_id_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "paperId": {
                "type": "string",
                "description": "OpenAlex paper ID (e.g., 'W2741809807' or 'https://openalex.org/W2741809807')"
            }
        },
        "required": ["paperId"]
    })
}

/// Abstract retrieval tool.
pub struct GetPaperAbstractTool;

#[async_trait::async_trait]
impl McpTool for GetPaperAbstractTool {
    fn name(&self) -> &'static str {
        "get_paper_abstract"
    }

    fn description(&self) -> &'static str {
        "Get the full abstract for a specific paper, with title, authors, year \
         and citation count."
    }

    fn input_schema(&self) -> serde_json::Value {
        paper_id_schema()
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;
        let paper_id = require_work_id("paperId", &params.paper_id)?;

        let paper = ctx.client.fetch_work(paper_id).await?;

        Ok(formatters::format_paper_abstract(&paper))
    }
}

/// Claim extraction prompt tool.
pub struct ExtractClaimsTool;

#[async_trait::async_trait]
impl McpTool for ExtractClaimsTool {
    fn name(&self) -> &'static str {
        "extract_claims"
    }

    fn description(&self) -> &'static str {
        "Prepare a paper's abstract for claim extraction: research question, \
         methodology, findings and conclusions."
    }

    fn input_schema(&self) -> serde_json::Value {
        paper_id_schema()
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;
        let paper_id = require_work_id("paperId", &params.paper_id)?;

        let paper = ctx.client.fetch_work(paper_id).await?;

        if !paper.has_abstract() {
            return Ok("Cannot extract claims: No abstract available for this paper".to_string());
        }

        let mut output = formatters::format_paper_header(&paper);
        output.push_str(&format!("\n**Abstract:**\n{}\n\n", paper.abstract_text()));
        output.push_str("**Instructions for claim extraction:**\n");
        output.push_str("Please analyze the abstract above and extract:\n");
        output.push_str("1. Main research question or hypothesis\n");
        output.push_str("2. Key methodology or approach\n");
        output.push_str("3. Primary findings or results\n");
        output.push_str("4. Main conclusions or implications\n");

        Ok(output)
    }
}
