//! Output formatters for tool responses.

mod json;
mod markdown;

pub use json::{compact_paper, compact_papers};
pub use markdown::{
    format_paper_abstract, format_paper_header, format_paper_list, format_search_results,
};
