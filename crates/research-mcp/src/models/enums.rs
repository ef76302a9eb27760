//! Enumeration types for API and tool parameters.

use serde::{Deserialize, Serialize};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

/// Sort keys supported by the OpenAlex works search.
///
/// Always applied descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most cited first.
    #[default]
    CitedByCount,
    /// Newest first.
    PublicationDate,
    /// Best search match first.
    #[serde(alias = "relevance")]
    RelevanceScore,
}

impl SortKey {
    /// Upstream field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CitedByCount => "cited_by_count",
            Self::PublicationDate => "publication_date",
            Self::RelevanceScore => "relevance_score",
        }
    }

    /// Value for the `sort` query parameter.
    #[must_use]
    pub fn sort_param(self) -> String {
        format!("{}:desc", self.as_str())
    }
}

/// Which side of the citation graph to walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationDirection {
    /// Papers that cite this paper.
    Citations,
    /// Papers that this paper cites.
    References,
    /// Both citations and references.
    #[default]
    Both,
}

impl CitationDirection {
    /// Whether citing papers should be fetched.
    #[must_use]
    pub const fn includes_citations(self) -> bool {
        matches!(self, Self::Citations | Self::Both)
    }

    /// Whether referenced papers should be fetched.
    #[must_use]
    pub const fn includes_references(self) -> bool {
        matches!(self, Self::References | Self::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_param_is_descending() {
        assert_eq!(SortKey::default().sort_param(), "cited_by_count:desc");
        assert_eq!(SortKey::PublicationDate.sort_param(), "publication_date:desc");
    }

    #[test]
    fn test_sort_key_accepts_relevance_alias() {
        let key: SortKey = serde_json::from_str(r#""relevance""#).unwrap();
        assert_eq!(key, SortKey::RelevanceScore);
        let key: SortKey = serde_json::from_str(r#""relevance_score""#).unwrap();
        assert_eq!(key, SortKey::RelevanceScore);
    }

    #[test]
    fn test_direction_flags() {
        assert!(CitationDirection::Both.includes_citations());
        assert!(CitationDirection::Both.includes_references());
        assert!(!CitationDirection::Citations.includes_references());
        assert!(!CitationDirection::References.includes_citations());
    }
}
