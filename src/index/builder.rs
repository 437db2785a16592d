//! Batched index builder with build-wide deduplication.

use rustc_hash::FxHashSet;

use super::{CorpusIndex, IndexEntry};
use crate::phonetic::encode;

/// Default number of entries buffered before a segment is sealed.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Counters collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Tokens offered to the builder
    pub tokens: usize,
    /// Tokens skipped because the same surface form was already seen
    pub duplicates: usize,
    /// Distinct tokens with no phonetic content
    pub empty: usize,
    /// Entries emitted
    pub entries: usize,
    /// Segments sealed so far
    pub segments: usize,
}

/// Accumulates index entries from a token stream.
///
/// Entries are buffered and sealed into segments of at most `batch_size`
/// entries. The seen-set lives for the whole build, so a token repeated
/// across segment boundaries is still encoded only once.
#[derive(Debug)]
pub struct IndexBuilder {
    seen: FxHashSet<String>,
    buffer: Vec<IndexEntry>,
    segments: Vec<Vec<IndexEntry>>,
    batch_size: usize,
    stats: BuildStats,
}

impl IndexBuilder {
    /// Create a builder with [`DEFAULT_BATCH_SIZE`].
    pub fn new() -> Self {
        Self::with_batch_size(DEFAULT_BATCH_SIZE)
    }

    /// Create a builder that seals a segment every `batch_size` entries.
    ///
    /// A batch size of zero is treated as one.
    pub fn with_batch_size(batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            seen: FxHashSet::default(),
            buffer: Vec::with_capacity(batch_size.min(DEFAULT_BATCH_SIZE)),
            segments: Vec::new(),
            batch_size,
            stats: BuildStats::default(),
        }
    }

    /// Offer one token.
    ///
    /// Returns true if an entry was emitted. Repeated surface forms
    /// (case-sensitive) and tokens without letters are skipped.
    pub fn push(&mut self, token: &str) -> bool {
        self.stats.tokens += 1;

        if self.seen.contains(token) {
            self.stats.duplicates += 1;
            return false;
        }
        self.seen.insert(token.to_owned());

        let Some(encoded) = encode(token) else {
            self.stats.empty += 1;
            return false;
        };

        self.buffer.push(IndexEntry::from(encoded));
        self.stats.entries += 1;

        if self.buffer.len() >= self.batch_size {
            self.seal();
        }
        true
    }

    /// Offer every token from an iterator.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.push(token.as_ref());
        }
    }

    /// Counters so far.
    #[inline]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    fn seal(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let segment = std::mem::replace(
            &mut self.buffer,
            Vec::with_capacity(self.batch_size.min(DEFAULT_BATCH_SIZE)),
        );
        tracing::trace!(entries = segment.len(), "sealed index segment");
        self.segments.push(segment);
        self.stats.segments += 1;
    }

    /// Seal the last segment and concatenate all segments into an index.
    pub fn finish(mut self) -> CorpusIndex {
        self.seal();
        tracing::debug!(
            tokens = self.stats.tokens,
            duplicates = self.stats.duplicates,
            empty = self.stats.empty,
            entries = self.stats.entries,
            segments = self.stats.segments,
            "built corpus index"
        );
        CorpusIndex::from_segments(self.segments)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an index from a token stream with the default batch size.
pub fn build_index<I, S>(tokens: I) -> CorpusIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = IndexBuilder::new();
    builder.extend(tokens);
    builder.finish()
}
