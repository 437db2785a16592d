//! Feature projection and adaptive clustering of the corpus index.
//!
//! Each index entry is projected to a 2-D feature (leading letter codepoint,
//! trailing digit value) and the corpus is clustered with a deterministic
//! k-means. The group count starts at `initial_groups` and shrinks until
//! every group holds at least `min_group_size` entries, bottoming out at
//! `min_groups`:
//!
//! ```text
//! groups = initial_groups
//! loop:
//!     fit k-means with `groups` clusters
//!     if every population >= min_group_size: accept
//!     if groups == min_groups:             accept (degraded)
//!     groups -= 1
//! ```
//!
//! Features are clustered unscaled. The letter axis spans 26 values and the
//! digit axis up to 667, so clusters mostly split on the digits, while the
//! matcher's ranking weighs the letter ten times heavier.

pub mod config;
pub mod error;
pub mod features;
pub mod kmeans;
pub mod partitioner;

pub use config::PartitionConfig;
pub use error::PartitionError;
pub use features::{project, FeatureVector, LEADING_WEIGHT};
pub use partitioner::{partition, AdaptivePartitioner, Partitioning};
