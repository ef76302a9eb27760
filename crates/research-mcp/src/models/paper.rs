//! Normalized paper record.

use serde::Serialize;

use super::{AbstractIndex, RawWork, reconstruct_abstract};

/// Title used when a work has none.
pub const NO_TITLE: &str = "No title";

/// Number of author names kept on a normalized record.
pub const MAX_AUTHORS: usize = 5;

/// Stable, flattened representation of an OpenAlex work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedPaper {
    /// Upstream identifier (OpenAlex URL), empty if upstream sent none.
    pub id: String,

    /// Title, or [`NO_TITLE`].
    pub title: String,

    /// Up to five display names joined by ", ", suffixed with " et al." when
    /// upstream listed more.
    pub authors: String,

    /// Publication year.
    pub publication_year: Option<i32>,

    /// Citation count.
    pub cited_by_count: u64,

    /// Abstract as an inverted index.
    pub abstract_index: Option<AbstractIndex>,

    /// DOI URL.
    pub doi: Option<String>,

    /// Landing URL: the DOI when present, the OpenAlex ID otherwise.
    pub url: String,

    /// Work type.
    #[serde(rename = "type")]
    pub work_type: Option<String>,
}

impl NormalizedPaper {
    /// Reconstructed abstract text, or the "No abstract available" sentinel.
    #[must_use]
    pub fn abstract_text(&self) -> String {
        reconstruct_abstract(self.abstract_index.as_ref())
    }

    /// Returns true if the work carries a non-empty abstract.
    #[must_use]
    pub fn has_abstract(&self) -> bool {
        self.abstract_index.as_ref().is_some_and(|index| !index.is_empty())
    }

    /// Publication year as display text.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.publication_year.map_or_else(|| "Unknown".to_string(), |year| year.to_string())
    }

    /// Short OpenAlex key (e.g., "W2741809807") taken from the ID URL.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }
}

impl From<RawWork> for NormalizedPaper {
    fn from(work: RawWork) -> Self {
        let authorships = work.authorships.unwrap_or_default();

        let mut authors = authorships
            .iter()
            .take(MAX_AUTHORS)
            .filter_map(|a| a.display_name())
            .collect::<Vec<_>>()
            .join(", ");

        if authorships.len() > MAX_AUTHORS {
            authors.push_str(" et al.");
        }

        let id = work.id.unwrap_or_default();
        let url = work.doi.clone().filter(|doi| !doi.is_empty()).unwrap_or_else(|| id.clone());

        Self {
            title: work.title.unwrap_or_else(|| NO_TITLE.to_string()),
            authors,
            publication_year: work.publication_year,
            cited_by_count: work.cited_by_count.unwrap_or(0),
            abstract_index: work.abstract_inverted_index,
            doi: work.doi,
            url,
            work_type: work.work_type,
            id,
        }
    }
}
