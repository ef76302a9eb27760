//! JSON output formatting with token efficiency.

use serde_json::{Value, json};

use crate::models::NormalizedPaper;

/// Create a compact paper representation for JSON output.
///
/// The inverted index is dropped; `hasAbstract` tells the caller whether
/// `get_paper_abstract` is worth calling.
#[must_use]
pub fn compact_paper(paper: &NormalizedPaper) -> Value {
    let mut obj = json!({
        "id": paper.id,
        "title": paper.title,
        "year": paper.publication_year,
        "citations": paper.cited_by_count,
        "url": paper.url,
        "hasAbstract": paper.has_abstract(),
    });

    if !paper.authors.is_empty() {
        obj["authors"] = json!(paper.authors);
    }

    if let Some(doi) = &paper.doi {
        obj["doi"] = json!(doi);
    }

    if let Some(work_type) = &paper.work_type {
        obj["type"] = json!(work_type);
    }

    obj
}

/// Compact representations of a list of papers.
#[must_use]
pub fn compact_papers(papers: &[NormalizedPaper]) -> Vec<Value> {
    papers.iter().map(compact_paper).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_paper() {
        let paper = NormalizedPaper {
            id: "https://openalex.org/W1".to_string(),
            title: "Test Paper".to_string(),
            authors: "Jane Roe".to_string(),
            publication_year: Some(2024),
            cited_by_count: 42,
            url: "https://openalex.org/W1".to_string(),
            ..Default::default()
        };

        let compact = compact_paper(&paper);

        assert_eq!(compact["id"], "https://openalex.org/W1");
        assert_eq!(compact["title"], "Test Paper");
        assert_eq!(compact["year"], 2024);
        assert_eq!(compact["citations"], 42);
        assert_eq!(compact["authors"], "Jane Roe");
        assert_eq!(compact["hasAbstract"], false);
        assert!(compact.get("doi").is_none());
    }
}
