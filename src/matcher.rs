//! Query matching against a partitioned corpus.
//!
//! A query code is routed to the single partition with the nearest
//! centroid; only that partition's members are ranked. Entries in other
//! partitions are never considered, even when they would score better.

use serde::Serialize;

use crate::partition::{FeatureVector, Partitioning};
use crate::phonetic::PhoneticCode;

/// Default number of results.
pub const DEFAULT_TOP_K: usize = 5;

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// The indexed word
    pub word: String,
    /// Its phonetic code
    pub code: PhoneticCode,
    /// Weighted distance from the query code
    pub distance: u32,
}

/// Ranks the members of the query's partition.
///
/// Candidates are sorted by ascending weighted distance; equal distances
/// keep corpus order. At most `k` matches are returned.
pub fn rank(query: &PhoneticCode, partitioning: &Partitioning, k: usize) -> Vec<Match> {
    let feature = FeatureVector::from_code(query);
    let Some(partition) = partitioning.classify(&feature) else {
        return Vec::new();
    };

    let members = partitioning.members(partition);
    tracing::debug!(
        query = %query,
        partition,
        candidates = members.len(),
        "classified query"
    );

    let features = partitioning.features();
    let mut scored: Vec<(u32, usize)> = members
        .iter()
        .map(|&i| (feature.weighted_distance(&features[i]), i))
        .collect();
    scored.sort_by_key(|&(distance, _)| distance);

    let entries = partitioning.entries();
    scored
        .into_iter()
        .take(k)
        .map(|(distance, i)| Match {
            word: entries[i].word.clone(),
            code: entries[i].code,
            distance,
        })
        .collect()
}

/// The words of the top `k` matches for `query`.
///
/// Returns an empty list when the corpus, or the chosen partition, is empty.
pub fn match_code(query: &PhoneticCode, partitioning: &Partitioning, k: usize) -> Vec<String> {
    rank(query, partitioning, k)
        .into_iter()
        .map(|m| m.word)
        .collect()
}
