//! OpenAlex inverted-index abstracts.
//!
//! OpenAlex does not ship abstracts as text. Each work carries an
//! `abstract_inverted_index` object mapping every distinct word to the token
//! offsets where it occurs, e.g. `{"the": [0, 4], "cat": [1]}`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text returned when a work has no abstract.
pub const NO_ABSTRACT: &str = "No abstract available";

/// Word → positions index, kept in upstream key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbstractIndex {
    entries: Vec<(String, Vec<u32>)>,
}

impl AbstractIndex {
    /// Build an index from `(word, positions)` entries.
    #[must_use]
    pub fn new(entries: Vec<(String, Vec<u32>)>) -> Self {
        Self { entries }
    }

    /// Returns true if the index has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of tokens (sum of all position lists).
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.entries.iter().map(|(_, positions)| positions.len()).sum()
    }

    /// Iterate over `(word, positions)` entries in upstream order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.entries.iter().map(|(word, positions)| (word.as_str(), positions.as_slice()))
    }

    /// Rebuild the abstract text.
    ///
    /// Words are emitted in ascending position order joined by single spaces.
    /// Gaps in the positions are skipped. Equal positions keep input order.
    #[must_use]
    pub fn reconstruct(&self) -> String {
        let mut tokens: Vec<(u32, &str)> = self
            .entries
            .iter()
            .flat_map(|(word, positions)| positions.iter().map(move |&pos| (pos, word.as_str())))
            .collect();

        tokens.sort_by_key(|&(pos, _)| pos);

        tokens.iter().map(|&(_, word)| word).collect::<Vec<_>>().join(" ")
    }
}

/// Reconstruct an abstract, falling back to [`NO_ABSTRACT`] when the index is
/// absent or empty.
#[must_use]
pub fn reconstruct_abstract(index: Option<&AbstractIndex>) -> String {
    match index {
        Some(index) if !index.is_empty() => index.reconstruct(),
        _ => NO_ABSTRACT.to_string(),
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<u32>)> for AbstractIndex {
    fn from_iter<I: IntoIterator<Item = (S, Vec<u32>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(word, positions)| (word.into(), positions)).collect())
    }
}

impl Serialize for AbstractIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, positions) in &self.entries {
            map.serialize_entry(word, positions)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AbstractIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = AbstractIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of words to arrays of non-negative integer positions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((word, positions)) = access.next_entry::<String, Vec<u32>>()? {
                    entries.push((word, positions));
                }
                Ok(AbstractIndex::new(entries))
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}
