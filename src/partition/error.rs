//! Error types for partitioner configuration.

use thiserror::Error;

/// Invalid partitioner settings, reported when a configuration is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// `initial_groups` or `min_groups` is zero.
    #[error("Group counts must be at least 1")]
    ZeroGroups,

    /// `min_groups` is larger than `initial_groups`.
    #[error("min_groups ({min}) cannot exceed initial_groups ({initial})")]
    MinGroupsExceedsInitial {
        /// Configured starting group count
        initial: usize,
        /// Configured floor
        min: usize,
    },

    /// `min_group_size` is zero.
    #[error("min_group_size must be at least 1")]
    ZeroMinGroupSize,

    /// `max_iterations` is zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    /// `restarts` is zero.
    #[error("restarts must be at least 1")]
    ZeroRestarts,
}

/// A specialized `Result` type for partitioner configuration.
pub type Result<T> = std::result::Result<T, PartitionError>;
