//! Markdown output formatting.

use crate::models::NormalizedPaper;

/// Format search results as a numbered list.
#[must_use]
pub fn format_search_results(query: &str, papers: &[NormalizedPaper]) -> String {
    if papers.is_empty() {
        return format!("No papers found for query: {query}");
    }

    let mut output = format!("Found {} papers for '{}':\n\n", papers.len(), query);

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format!("{}. **{}**\n", i + 1, paper.title));
        output.push_str(&format!("   Authors: {}\n", authors_or_unknown(paper)));
        output.push_str(&format!("   Year: {}\n", paper.year_label()));
        output.push_str(&format!("   Citations: {}\n", paper.cited_by_count));
        output.push_str(&format!("   URL: {}\n", paper.url));
        output.push_str(&format!("   ID: {}\n\n", paper.id));
    }

    output
}

/// Format a paper with its full reconstructed abstract.
#[must_use]
pub fn format_paper_abstract(paper: &NormalizedPaper) -> String {
    let mut output = format!("**{}**\n", paper.title);
    output.push_str(&format!("Authors: {}\n", authors_or_unknown(paper)));
    output.push_str(&format!("Year: {}\n", paper.year_label()));
    output.push_str(&format!("Citations: {}\n\n", paper.cited_by_count));
    output.push_str(&format!("**Abstract:**\n{}\n", paper.abstract_text()));
    output
}

/// Bold-labelled header block used at the top of analysis prompts.
#[must_use]
pub fn format_paper_header(paper: &NormalizedPaper) -> String {
    let mut output = format!("**Paper:** {}\n", paper.title);
    output.push_str(&format!("**Authors:** {}\n", authors_or_unknown(paper)));
    output.push_str(&format!("**Year:** {}\n", paper.year_label()));
    output.push_str(&format!("**Citations:** {}\n", paper.cited_by_count));
    output.push_str(&format!("**ID:** {}\n", paper.id));
    output
}

/// One-line-per-paper list used in citation networks.
#[must_use]
pub fn format_paper_list(papers: &[NormalizedPaper]) -> String {
    if papers.is_empty() {
        return "*None found.*\n".to_string();
    }

    let mut output = String::new();
    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format!(
            "{}. **{}** ({}) - {} citations\n   ID: {}\n",
            i + 1,
            paper.title,
            paper.year_label(),
            paper.cited_by_count,
            paper.id
        ));
    }
    output
}

fn authors_or_unknown(paper: &NormalizedPaper) -> &str {
    if paper.authors.is_empty() { "Unknown" } else { &paper.authors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbstractIndex;

    fn paper() -> NormalizedPaper {
        NormalizedPaper {
            id: "https://openalex.org/W1".to_string(),
            title: "Attention Is All You Need".to_string(),
            authors: "Ashish Vaswani, Noam Shazeer".to_string(),
            publication_year: Some(2017),
            cited_by_count: 1000,
            abstract_index: Some(
                vec![("transformers", vec![1]), ("We", vec![0]), ("propose", vec![2])]
                    .into_iter()
                    .collect::<AbstractIndex>(),
            ),
            doi: None,
            url: "https://openalex.org/W1".to_string(),
            work_type: Some("article".to_string()),
        }
    }

    #[test]
    fn test_search_results_layout() {
        let out = format_search_results("attention", &[paper()]);
        assert!(out.starts_with("Found 1 papers for 'attention':"));
        assert!(out.contains("1. **Attention Is All You Need**"));
        assert!(out.contains("   Year: 2017\n"));
        assert!(out.contains("   ID: https://openalex.org/W1\n"));
    }

    #[test]
    fn test_empty_search_results() {
        assert_eq!(format_search_results("nothing", &[]), "No papers found for query: nothing");
    }

    #[test]
    fn test_paper_abstract_is_reconstructed() {
        let out = format_paper_abstract(&paper());
        assert!(out.contains("**Abstract:**\nWe transformers propose\n"));
    }

    #[test]
    fn test_missing_authors_and_year() {
        let p = NormalizedPaper { authors: String::new(), publication_year: None, ..paper() };
        let out = format_paper_header(&p);
        assert!(out.contains("**Authors:** Unknown"));
        assert!(out.contains("**Year:** Unknown"));
    }
}
