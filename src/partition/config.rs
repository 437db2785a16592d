//! Partitioner configuration.

use super::error::{PartitionError, Result};

/// Default starting number of groups.
pub const DEFAULT_INITIAL_GROUPS: usize = 5;
/// Default minimum population of an accepted group.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 5;
/// Default lowest group count tried before degrading.
pub const DEFAULT_MIN_GROUPS: usize = 2;
/// Default Lloyd iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;
/// Default number of k-means++ seedings per attempt.
pub const DEFAULT_RESTARTS: usize = 10;
/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Validated settings for the adaptive partitioner.
///
/// # Validation
///
/// Group counts, the minimum group size, the iteration cap and the restart
/// count must all be positive, and `min_groups <= initial_groups`.
///
/// # Example
///
/// ```rust,ignore
/// let config = PartitionConfig::new(5, 5, 2)?.with_seed(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionConfig {
    initial_groups: usize,
    min_group_size: usize,
    min_groups: usize,
    max_iterations: usize,
    restarts: usize,
    seed: u64,
}

impl PartitionConfig {
    /// Create a configuration with default clustering parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError`] if any group setting is invalid.
    pub fn new(initial_groups: usize, min_group_size: usize, min_groups: usize) -> Result<Self> {
        let config = Self {
            initial_groups,
            min_group_size,
            min_groups,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
            seed: DEFAULT_SEED,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.initial_groups == 0 || self.min_groups == 0 {
            return Err(PartitionError::ZeroGroups);
        }
        if self.min_groups > self.initial_groups {
            return Err(PartitionError::MinGroupsExceedsInitial {
                initial: self.initial_groups,
                min: self.min_groups,
            });
        }
        if self.min_group_size == 0 {
            return Err(PartitionError::ZeroMinGroupSize);
        }
        if self.max_iterations == 0 {
            return Err(PartitionError::ZeroIterations);
        }
        if self.restarts == 0 {
            return Err(PartitionError::ZeroRestarts);
        }
        Ok(())
    }

    /// Replace the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the Lloyd iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::ZeroIterations`] for zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        self.max_iterations = max_iterations;
        self.validate()?;
        Ok(self)
    }

    /// Replace the number of seedings per attempt.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::ZeroRestarts`] for zero.
    pub fn with_restarts(mut self, restarts: usize) -> Result<Self> {
        self.restarts = restarts;
        self.validate()?;
        Ok(self)
    }

    /// Starting number of groups.
    #[inline]
    pub fn initial_groups(&self) -> usize {
        self.initial_groups
    }

    /// Minimum population every accepted group must reach.
    #[inline]
    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    /// Lowest group count tried; its result is accepted unconditionally.
    #[inline]
    pub fn min_groups(&self) -> usize {
        self.min_groups
    }

    /// Lloyd iteration cap.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// k-means++ seedings per attempt.
    #[inline]
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// RNG seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            initial_groups: DEFAULT_INITIAL_GROUPS,
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            min_groups: DEFAULT_MIN_GROUPS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
            seed: DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PartitionConfig::default();
        assert_eq!(config.initial_groups(), 5);
        assert_eq!(config.min_group_size(), 5);
        assert_eq!(config.min_groups(), 2);
        assert_eq!(config, PartitionConfig::new(5, 5, 2).unwrap());
    }

    #[test]
    fn test_rejects_invalid_groups() {
        assert_eq!(PartitionConfig::new(0, 5, 0), Err(PartitionError::ZeroGroups));
        assert_eq!(PartitionConfig::new(5, 5, 0), Err(PartitionError::ZeroGroups));
        assert_eq!(
            PartitionConfig::new(2, 5, 3),
            Err(PartitionError::MinGroupsExceedsInitial { initial: 2, min: 3 })
        );
        assert_eq!(PartitionConfig::new(5, 0, 2), Err(PartitionError::ZeroMinGroupSize));
    }

    #[test]
    fn test_builder_setters() {
        let config = PartitionConfig::default()
            .with_seed(7)
            .with_max_iterations(10)
            .unwrap()
            .with_restarts(3)
            .unwrap();
        assert_eq!(config.seed(), 7);
        assert_eq!(config.max_iterations(), 10);
        assert_eq!(config.restarts(), 3);

        assert_eq!(
            PartitionConfig::default().with_max_iterations(0),
            Err(PartitionError::ZeroIterations)
        );
        assert_eq!(
            PartitionConfig::default().with_restarts(0),
            Err(PartitionError::ZeroRestarts)
        );
    }
}
