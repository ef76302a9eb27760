//! Citation network tool.

use serde_json::json;

use super::{McpTool, ToolContext, clamp_count, require_work_id};
use crate::config::limits;
use crate::error::{ClientResult, ToolResult};
use crate::formatters;
use crate::models::{CitationNetworkInput, NormalizedPaper, ResponseFormat};

/// Citing and referenced papers around one work.
pub struct CitationNetworkTool;

#[async_trait::async_trait]
impl McpTool for CitationNetworkTool {
    fn name(&self) -> &'static str {
        "get_citation_network"
    }

    fn description(&self) -> &'static str {
        "Get the papers that cite a paper and the papers it references, most \
         cited first."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "OpenAlex paper ID"
                },
                "direction": {
                    "type": "string",
                    "enum": ["citations", "references", "both"],
                    "default": "both"
                },
                "maxResults": {
                    "type": "integer",
                    "default": limits::DEFAULT_NETWORK_RESULTS,
                    "minimum": 1,
                    "maximum": limits::MAX_PAGE_RESULTS,
                    "description": "Maximum papers per direction"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["paperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationNetworkInput = serde_json::from_value(input)?;
        let paper_id = require_work_id("paperId", &params.paper_id)?;
        let max_results = clamp_count(params.max_results, limits::MAX_PAGE_RESULTS);

        let root = ctx.client.fetch_work(paper_id).await?;

        let cited_by = if params.direction.includes_citations() {
            Some(ctx.client.get_cited_by(paper_id, max_results).await)
        } else {
            None
        };

        let references = if params.direction.includes_references() {
            Some(ctx.client.get_references(paper_id, max_results).await)
        } else {
            None
        };

        match params.response_format {
            ResponseFormat::Markdown => {
                let mut output = format!(
                    "# Citation Network\n\n\
                     **Paper:** {} ({})\n\
                     **Citations:** {}\n\
                     **ID:** {}\n\n",
                    root.title,
                    root.year_label(),
                    root.cited_by_count,
                    root.id
                );

                if let Some(result) = &cited_by {
                    push_section(&mut output, "Cited By", "citing papers", result);
                }
                if let Some(result) = &references {
                    push_section(&mut output, "References", "references", result);
                }

                Ok(output)
            }
            ResponseFormat::Json => {
                let mut obj = json!({ "paper": formatters::compact_paper(&root) });
                if let Some(result) = &cited_by {
                    obj["citedBy"] = section_json(result);
                }
                if let Some(result) = &references {
                    obj["references"] = section_json(result);
                }
                Ok(serde_json::to_string_pretty(&obj)?)
            }
        }
    }
}

fn push_section(
    output: &mut String,
    heading: &str,
    noun: &str,
    result: &ClientResult<Vec<NormalizedPaper>>,
) {
    match result {
        Ok(papers) => {
            output.push_str(&format!("## {heading} ({})\n\n", papers.len()));
            output.push_str(&formatters::format_paper_list(papers));
        }
        Err(e) => {
            output.push_str(&format!("## {heading}\n\n*Failed to fetch {noun}: {e}*\n"));
        }
    }
    output.push('\n');
}

fn section_json(result: &ClientResult<Vec<NormalizedPaper>>) -> serde_json::Value {
    match result {
        Ok(papers) => json!(formatters::compact_papers(papers)),
        Err(e) => json!({ "error": e.to_string() }),
    }
}
