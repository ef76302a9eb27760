//! Data models for OpenAlex works and tool inputs.
//!
//! Upstream models use `#[serde(default)]` on every field; OpenAlex omits or
//! nulls fields freely and nothing may be assumed present.

mod abstract_index;
mod enums;
mod inputs;
mod paper;
mod work;

pub use abstract_index::{AbstractIndex, NO_ABSTRACT, reconstruct_abstract};
pub use enums::{CitationDirection, ResponseFormat, SortKey};
pub use inputs::*;
pub use paper::{MAX_AUTHORS, NO_TITLE, NormalizedPaper};
pub use work::{Authorship, DehydratedAuthor, RawWork, WorksPage};
