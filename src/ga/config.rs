//! GA configuration.

use crate::error::ConfigError;
use crate::scoring::Objective;

/// Configuration for the genetic search strategy.
///
/// # Examples
///
/// ```
/// use seatplan::ga::GaConfig;
/// use seatplan::scoring::Objective;
///
/// let config = GaConfig::new(9, 4)
///     .with_population_size(50)
///     .with_generations(1000)
///     .with_mutation_rate(0.1)
///     .with_objective(Objective::Balanced)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of groups in every candidate partition.
    pub num_groups: usize,

    /// Capacity of each group. `num_groups * group_size` must cover the
    /// roster.
    pub group_size: usize,

    /// Number of candidate partitions per generation.
    ///
    /// Half are retained as parents each generation, and crossover draws
    /// two distinct parents per offspring, so at least 4 is required.
    pub population_size: usize,

    /// Number of generations to run. The budget is fixed: there is no
    /// convergence-based early stop. Zero is allowed and returns the best
    /// of the evaluated initial population.
    pub generations: usize,

    /// Per-member probability of a cross-group swap during mutation,
    /// in `[0, 1]`.
    pub mutation_rate: f64,

    /// Scoring strategy used as the objective.
    pub objective: Objective,

    /// Observer cadence: stats are reported every this many generations.
    /// 0 disables reporting.
    pub report_every: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration for the given group layout with defaults
    /// for everything else.
    pub fn new(num_groups: usize, group_size: usize) -> Self {
        Self {
            num_groups,
            group_size,
            population_size: 50,
            generations: 500,
            mutation_rate: 0.1,
            objective: Objective::default(),
            report_every: 100,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate. Validated, not clamped: out-of-range values
    /// are reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the scoring strategy.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the observer cadence (0 disables).
    pub fn with_report_every(mut self, every: usize) -> Self {
        self.report_every = every;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every roster-independent parameter.
    ///
    /// Capacity against the roster is checked where the roster is known,
    /// by the population generator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_groups == 0 {
            return Err(ConfigError::NonPositive { param: "num_groups" });
        }
        if self.group_size == 0 {
            return Err(ConfigError::NonPositive { param: "group_size" });
        }
        if self.population_size == 0 {
            return Err(ConfigError::NonPositive {
                param: "population_size",
            });
        }
        if self.population_size < 4 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }
}
