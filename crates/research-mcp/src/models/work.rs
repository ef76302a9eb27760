//! Raw work records as returned by the OpenAlex API.
//!
//! Every field is optional; OpenAlex omits or nulls fields freely.

use serde::Deserialize;

use super::AbstractIndex;

/// One work from the OpenAlex `/works` endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWork {
    /// OpenAlex ID (e.g., "https://openalex.org/W2741809807").
    #[serde(default)]
    pub id: Option<String>,

    /// Work title.
    #[serde(default)]
    pub title: Option<String>,

    /// Authorships in upstream order.
    #[serde(default)]
    pub authorships: Option<Vec<Authorship>>,

    /// Publication year.
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Number of works citing this one.
    #[serde(default)]
    pub cited_by_count: Option<u64>,

    /// Abstract as an inverted index.
    #[serde(default)]
    pub abstract_inverted_index: Option<AbstractIndex>,

    /// DOI as a full URL (e.g., "https://doi.org/10.7717/peerj.4375").
    #[serde(default)]
    pub doi: Option<String>,

    /// Work type (e.g., "article", "preprint").
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,
}

/// Author slot on a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorship {
    /// Author details.
    #[serde(default)]
    pub author: Option<DehydratedAuthor>,
}

/// Minimal author record embedded in an authorship.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DehydratedAuthor {
    /// OpenAlex author ID.
    #[serde(default)]
    pub id: Option<String>,

    /// Author display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Envelope for list responses from `/works`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorksPage {
    /// Works on this page.
    #[serde(default)]
    pub results: Vec<RawWork>,
}

impl Authorship {
    /// Display name of the author, if present and non-empty.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.author.as_ref()?.display_name.as_deref().filter(|name| !name.is_empty())
    }
}
