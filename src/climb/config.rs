//! Local-search configuration.

use crate::error::ConfigError;
use crate::scoring::Objective;

/// Configuration for the greedy + hill-climb strategy.
///
/// # Examples
///
/// ```
/// use seatplan::climb::ClimbConfig;
///
/// let config = ClimbConfig::new(9, 4)
///     .with_iterations(5000)
///     .with_trials(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbConfig {
    /// Number of groups in the partition.
    pub num_groups: usize,

    /// Capacity of each group. `num_groups * group_size` must cover the
    /// roster.
    pub group_size: usize,

    /// Swap attempts per hill-climb. The budget is fixed: skipped
    /// attempts (an empty group drawn) still count, and there is no
    /// convergence-based early exit. Zero is allowed and returns the
    /// greedy construction untouched.
    pub iterations: usize,

    /// Number of independent greedy + climb trials. Each trial starts
    /// from a fresh shuffle and shares nothing with the others.
    pub trials: usize,

    /// Scoring strategy used as the objective.
    pub objective: Objective,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl ClimbConfig {
    /// Creates a configuration for the given group layout with defaults
    /// for everything else.
    pub fn new(num_groups: usize, group_size: usize) -> Self {
        Self {
            num_groups,
            group_size,
            iterations: 5000,
            trials: 10,
            objective: Objective::default(),
            seed: None,
        }
    }

    /// Sets the per-trial swap budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the trial count.
    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Sets the scoring strategy.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every roster-independent parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_groups == 0 {
            return Err(ConfigError::NonPositive { param: "num_groups" });
        }
        if self.group_size == 0 {
            return Err(ConfigError::NonPositive { param: "group_size" });
        }
        if self.trials == 0 {
            return Err(ConfigError::NonPositive { param: "trials" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClimbConfig::new(9, 4);
        assert_eq!(config.num_groups, 9);
        assert_eq!(config.group_size, 4);
        assert_eq!(config.iterations, 5000);
        assert_eq!(config.trials, 10);
        assert_eq!(config.objective, Objective::Balanced);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = ClimbConfig::new(2, 3)
            .with_iterations(100)
            .with_trials(3)
            .with_objective(Objective::Coverage)
            .with_seed(9);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.trials, 3);
        assert_eq!(config.objective, Objective::Coverage);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        assert_eq!(
            ClimbConfig::new(0, 4).validate().unwrap_err(),
            ConfigError::NonPositive { param: "num_groups" }
        );
        assert_eq!(
            ClimbConfig::new(4, 0).validate().unwrap_err(),
            ConfigError::NonPositive { param: "group_size" }
        );
    }

    #[test]
    fn test_validate_rejects_zero_trials() {
        assert_eq!(
            ClimbConfig::new(2, 2).with_trials(0).validate().unwrap_err(),
            ConfigError::NonPositive { param: "trials" }
        );
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        assert!(ClimbConfig::new(2, 2).with_iterations(0).validate().is_ok());
    }
}
