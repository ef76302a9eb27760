//! Multi-paper prompt builders: compare_papers, find_research_gaps.

use serde_json::json;

use super::{McpTool, ToolContext, clamp_count, require_non_empty};
use crate::config::limits;
use crate::error::{ClientResult, ToolError, ToolResult};
use crate::formatters;
use crate::models::{ComparePapersInput, NormalizedPaper, ResearchGapsInput, SortKey};

/// Paper comparison prompt tool.
pub struct ComparePapersTool;

#[async_trait::async_trait]
impl McpTool for ComparePapersTool {
    fn name(&self) -> &'static str {
        "compare_papers"
    }

    fn description(&self) -> &'static str {
        "Fetch 2-5 papers and prepare a side-by-side comparison of their research \
         questions, methods, findings and limitations."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperIds": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": limits::MIN_COMPARE_PAPERS,
                    "maxItems": limits::MAX_COMPARE_PAPERS,
                    "description": "OpenAlex paper IDs to compare"
                }
            },
            "required": ["paperIds"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ComparePapersInput = serde_json::from_value(input)?;

        let ids: Vec<&str> = params
            .paper_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .collect();

        if ids.len() < limits::MIN_COMPARE_PAPERS || ids.len() > limits::MAX_COMPARE_PAPERS {
            return Err(ToolError::validation(
                "paperIds",
                format!(
                    "expected between {} and {} paper IDs, got {}",
                    limits::MIN_COMPARE_PAPERS,
                    limits::MAX_COMPARE_PAPERS,
                    ids.len()
                ),
            ));
        }

        // One request per paper, in order; a failure stays in its slot.
        let mut fetched: Vec<(&str, ClientResult<NormalizedPaper>)> = Vec::with_capacity(ids.len());
        for &id in &ids {
            let result = ctx.client.fetch_work(id).await;
            if let Err(ref e) = result {
                tracing::warn!(paper_id = %id, error = %e, "Could not fetch paper for comparison");
            }
            fetched.push((id, result));
        }

        let succeeded = fetched.iter().filter(|(_, r)| r.is_ok()).count();
        if succeeded == 0 {
            return Err(ToolError::unavailable("none of the requested papers could be fetched"));
        }

        let mut output = format!("# Paper Comparison ({} papers)\n\n", fetched.len());

        for (i, (id, result)) in fetched.iter().enumerate() {
            match result {
                Ok(paper) => {
                    output.push_str(&format!("## Paper {}: {}\n\n", i + 1, paper.title));
                    output.push_str(&formatters::format_paper_header(paper));
                    output.push_str(&format!("\n**Abstract:**\n{}\n\n", paper.abstract_text()));
                }
                Err(e) => {
                    output.push_str(&format!("## Paper {}: {}\n\n", i + 1, id));
                    output.push_str(&format!("*Could not fetch this paper: {e}*\n\n"));
                }
            }
        }

        output.push_str("---\n\n**Instructions for comparison:**\n");
        output.push_str("Please compare the papers above and describe:\n");
        output.push_str("1. The research question each paper addresses\n");
        output.push_str("2. Differences in methodology or approach\n");
        output.push_str("3. Where the findings agree and where they contradict each other\n");
        output.push_str("4. Strengths and limitations of each paper\n");
        output.push_str("5. Which paper is most relevant for which use case\n");

        if succeeded < fetched.len() {
            output.push_str(&format!(
                "\nNote: only {} of {} papers could be fetched; compare the available ones.\n",
                succeeded,
                fetched.len()
            ));
        }

        Ok(output)
    }
}

/// Research gap analysis prompt tool.
pub struct FindResearchGapsTool;

#[async_trait::async_trait]
impl McpTool for FindResearchGapsTool {
    fn name(&self) -> &'static str {
        "find_research_gaps"
    }

    fn description(&self) -> &'static str {
        "Collect the most cited papers on a topic with their abstracts and prepare \
         an analysis of open questions and under-explored directions."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Research topic to survey"
                },
                "maxPapers": {
                    "type": "integer",
                    "default": limits::MAX_GAP_PAPERS,
                    "minimum": 1,
                    "maximum": limits::MAX_GAP_PAPERS,
                    "description": "Number of papers to analyze"
                },
                "yearFrom": {
                    "type": "integer",
                    "description": "Only include papers from this year onwards"
                }
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ResearchGapsInput = serde_json::from_value(input)?;
        let topic = require_non_empty("topic", &params.topic)?;
        let max_papers = clamp_count(params.max_papers, limits::MAX_GAP_PAPERS);

        let papers = ctx
            .client
            .search_works(topic, max_papers, SortKey::CitedByCount, params.year_from)
            .await?;

        if papers.is_empty() {
            return Ok(format!("No papers found for topic: {topic}"));
        }

        let mut output = format!("# Research Landscape: {topic}\n\n");
        output.push_str(&format!("Analyzed {} highly cited papers", papers.len()));
        if let Some(year) = params.year_from {
            output.push_str(&format!(" published since {year}"));
        }
        output.push_str(".\n\n");

        for (i, paper) in papers.iter().enumerate() {
            output.push_str(&format!(
                "## {}. {} ({})\n\nCitations: {}\n\n{}\n\n",
                i + 1,
                paper.title,
                paper.year_label(),
                paper.cited_by_count,
                paper.abstract_text()
            ));
        }

        output.push_str("---\n\n**Instructions for gap analysis:**\n");
        output.push_str("Based on the papers above, please identify:\n");
        output.push_str("1. Well-established findings the field agrees on\n");
        output.push_str("2. Open questions the papers raise but do not answer\n");
        output.push_str("3. Methodological gaps (datasets, populations, evaluation)\n");
        output.push_str("4. Contradictions between papers that need resolution\n");
        output.push_str("5. Promising directions for future research\n");

        Ok(output)
    }
}
