//! End-to-end phonetic search over a token stream.
//!
//! ```rust,ignore
//! use soundseek::corpus::TextCorpus;
//! use soundseek::search::{PhoneticSearch, SearchConfig};
//!
//! let corpus = TextCorpus::from_text("Lithuania is a beautiful country. Welcome to Lithuania!");
//! let search = PhoneticSearch::build(corpus.tokens(), &SearchConfig::default())?;
//! let outcome = search.find("lithuania");
//! assert!(outcome.words().contains(&"Lithuania"));
//! ```

use serde::{Deserialize, Serialize};

use crate::index::{CorpusIndex, IndexBuilder, DEFAULT_BATCH_SIZE};
use crate::matcher::{rank, Match, DEFAULT_TOP_K};
use crate::partition::config::{
    DEFAULT_INITIAL_GROUPS, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_GROUPS, DEFAULT_MIN_GROUP_SIZE,
    DEFAULT_RESTARTS, DEFAULT_SEED,
};
use crate::partition::error::Result;
use crate::partition::{AdaptivePartitioner, PartitionConfig, Partitioning};
use crate::phonetic::{encode, Encoded};

/// All tunables of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Starting number of partitions
    pub initial_groups: usize,
    /// Minimum population of an accepted partition
    pub min_group_size: usize,
    /// Lowest partition count tried
    pub min_groups: usize,
    /// Results returned per query
    pub top_k: usize,
    /// Index entries per sealed segment
    pub batch_size: usize,
    /// Clustering RNG seed
    pub seed: u64,
    /// Lloyd iteration cap
    pub max_iterations: usize,
    /// k-means++ seedings per attempt
    pub restarts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_groups: DEFAULT_INITIAL_GROUPS,
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            min_groups: DEFAULT_MIN_GROUPS,
            top_k: DEFAULT_TOP_K,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: DEFAULT_SEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
        }
    }
}

impl SearchConfig {
    /// Validated partitioner settings.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError`](crate::partition::PartitionError) if the
    /// group settings, iteration cap or restart count are invalid.
    pub fn partition_config(&self) -> Result<PartitionConfig> {
        PartitionConfig::new(self.initial_groups, self.min_group_size, self.min_groups)?
            .with_seed(self.seed)
            .with_max_iterations(self.max_iterations)?
            .with_restarts(self.restarts)
    }
}

/// Result of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query has no letters, so no code and no match is possible.
    NoPhoneticContent,
    /// The query was encoded and matched (possibly with zero results).
    Matches {
        /// The encoded query
        query: Encoded,
        /// Ranked matches, best first
        matches: Vec<Match>,
    },
}

impl SearchOutcome {
    /// Matched words, best first; empty for [`SearchOutcome::NoPhoneticContent`].
    pub fn words(&self) -> Vec<&str> {
        match self {
            Self::NoPhoneticContent => Vec::new(),
            Self::Matches { matches, .. } => matches.iter().map(|m| m.word.as_str()).collect(),
        }
    }

    /// Returns true if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::NoPhoneticContent => true,
            Self::Matches { matches, .. } => matches.is_empty(),
        }
    }
}

/// A partitioned corpus ready to answer queries.
#[derive(Debug, Clone)]
pub struct PhoneticSearch {
    partitioning: Partitioning,
    top_k: usize,
}

impl PhoneticSearch {
    /// Index and partition a token stream.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not describe a valid partitioner.
    pub fn build<I, S>(tokens: I, config: &SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let partition_config = config.partition_config()?;

        let mut builder = IndexBuilder::with_batch_size(config.batch_size);
        builder.extend(tokens);
        let index = builder.finish();

        Ok(Self::with_partition_config(index, partition_config, config.top_k))
    }

    /// Partition an existing index.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not describe a valid partitioner.
    pub fn from_index(index: CorpusIndex, config: &SearchConfig) -> Result<Self> {
        let partition_config = config.partition_config()?;
        Ok(Self::with_partition_config(index, partition_config, config.top_k))
    }

    fn with_partition_config(index: CorpusIndex, config: PartitionConfig, top_k: usize) -> Self {
        let partitioning = AdaptivePartitioner::new(config).partition(index);
        Self {
            partitioning,
            top_k,
        }
    }

    /// The underlying partitioning.
    #[inline]
    pub fn partitioning(&self) -> &Partitioning {
        &self.partitioning
    }

    /// Default number of results per query.
    #[inline]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Find the configured number of closest words to `word`.
    pub fn find(&self, word: &str) -> SearchOutcome {
        self.find_top(word, self.top_k)
    }

    /// Find up to `k` closest words to `word`.
    pub fn find_top(&self, word: &str, k: usize) -> SearchOutcome {
        let Some(query) = encode(word) else {
            tracing::debug!(word, "query has no phonetic content");
            return SearchOutcome::NoPhoneticContent;
        };
        let matches = rank(&query.code, &self.partitioning, k);
        SearchOutcome::Matches { query, matches }
    }
}
