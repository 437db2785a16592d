//! # soundseek
//!
//! Phonetic word search: find the words of a text corpus that sound most
//! like a query word.
//!
//! Words are reduced to American Soundex codes, projected onto a small
//! feature plane and clustered once per corpus. A query is routed to its
//! nearest cluster and only that cluster is ranked, so lookups stay cheap as
//! the corpus grows.
//!
//! ```text
//! tokens → encode → index (dedup) → features → adaptive k-means → match
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use soundseek::prelude::*;
//!
//! let corpus = TextCorpus::from_text("Lithuania is a beautiful country. Welcome to Lithuania!");
//! let search = PhoneticSearch::build(corpus.tokens(), &SearchConfig::default())?;
//!
//! for word in search.find("lithuania").words() {
//!     println!("Match: {}", word);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod index;
pub mod matcher;
pub mod partition;
pub mod phonetic;
pub mod search;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::corpus::{tokenize, CorpusError, TextCorpus};
    pub use crate::index::{build_index, CorpusIndex, IndexBuilder, IndexEntry};
    pub use crate::matcher::{match_code, rank, Match};
    pub use crate::partition::{
        partition, AdaptivePartitioner, FeatureVector, PartitionConfig, PartitionError,
        Partitioning,
    };
    pub use crate::phonetic::{encode, soundex, Encoded, PhoneticCode};
    pub use crate::search::{PhoneticSearch, SearchConfig, SearchOutcome};
}
