//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::{CitationDirection, ResponseFormat, SortKey};
use crate::config::limits;

/// Input for paper search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPapersInput {
    /// Research topic or keywords.
    pub query: String,

    /// Maximum papers to return.
    #[serde(default = "default_search_results")]
    pub max_results: u32,

    /// Only include papers published in or after this year.
    #[serde(default)]
    pub year_from: Option<i32>,

    /// Sort key (always descending).
    #[serde(default)]
    pub sort_by: SortKey,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_search_results() -> u32 {
    limits::DEFAULT_SEARCH_RESULTS
}

/// Input for tools that operate on a single paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperIdInput {
    /// OpenAlex ID, bare ("W123") or as a URL.
    pub paper_id: String,
}

/// Input for multi-paper comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparePapersInput {
    /// OpenAlex IDs of the papers to compare.
    pub paper_ids: Vec<String>,
}

/// Input for citation network retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationNetworkInput {
    /// OpenAlex ID of the root paper.
    pub paper_id: String,

    /// Citations, references, or both.
    #[serde(default)]
    pub direction: CitationDirection,

    /// Maximum papers per direction.
    #[serde(default = "default_network_results")]
    pub max_results: u32,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_network_results() -> u32 {
    limits::DEFAULT_NETWORK_RESULTS
}

/// Input for research gap analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchGapsInput {
    /// Research topic to survey.
    pub topic: String,

    /// Papers to include in the analysis.
    #[serde(default = "default_gap_papers")]
    pub max_papers: u32,

    /// Only include papers published in or after this year.
    #[serde(default)]
    pub year_from: Option<i32>,
}

fn default_gap_papers() -> u32 {
    limits::MAX_GAP_PAPERS
}
