//! Corpus index construction.
//!
//! The index is a flat, order-preserving table of `(code, word)` pairs built
//! from a token stream. Each distinct surface token is encoded at most once
//! per build, no matter how the stream is batched.
//!
//! ```rust,ignore
//! use soundseek::index::IndexBuilder;
//!
//! let mut builder = IndexBuilder::with_batch_size(1024);
//! builder.extend(["Hello", "oxylabs", "Hello"]);
//! let index = builder.finish();
//! assert_eq!(index.len(), 2);
//! ```

pub mod builder;

pub use builder::{build_index, BuildStats, IndexBuilder, DEFAULT_BATCH_SIZE};

use serde::{Deserialize, Serialize};

use crate::phonetic::{Encoded, PhoneticCode};

/// One row of the corpus index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Phonetic code of `word`
    pub code: PhoneticCode,
    /// The token reduced to its ASCII letters
    pub word: String,
}

impl From<Encoded> for IndexEntry {
    fn from(encoded: Encoded) -> Self {
        Self {
            code: encoded.code,
            word: encoded.word,
        }
    }
}

/// Flat table of index entries in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusIndex {
    entries: Vec<IndexEntry>,
}

impl CorpusIndex {
    /// Concatenate index segments in order.
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Vec<IndexEntry>>,
    {
        let mut entries = Vec::new();
        for mut segment in segments {
            entries.append(&mut segment);
        }
        Self { entries }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    #[inline]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// Consume the index, yielding its entries.
    pub fn into_entries(self) -> Vec<IndexEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a CorpusIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<IndexEntry>> for CorpusIndex {
    fn from(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }
}
