//! Error types for seatplan.
//!
//! Configuration problems are reported before any search work begins;
//! roster construction problems are reported by the roster builder in
//! [`crate::model`]. Invariant violations inside operators (duplicate
//! membership, capacity overrun) indicate bugs and panic rather than
//! surface here.

use thiserror::Error;

/// Invalid search configuration.
///
/// Every runner validates its config on entry and fails fast with one of
/// these before touching the roster or the RNG.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A count parameter that must be at least 1 was zero.
    #[error("{param} must be positive")]
    NonPositive {
        /// Name of the offending parameter.
        param: &'static str,
    },

    /// `num_groups * group_size` cannot seat the whole roster.
    #[error("total capacity {capacity} is less than roster size {required}")]
    InsufficientCapacity {
        /// Seats available across all groups.
        capacity: usize,
        /// Entities that need seating.
        required: usize,
    },

    /// Mutation rate outside `[0, 1]`.
    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    /// Population too small to sample two distinct crossover parents.
    ///
    /// Half the population is retained as parents each generation and each
    /// offspring needs two distinct parents, so fewer than 4 individuals
    /// can never work.
    #[error("population_size must be at least 4, got {0}")]
    PopulationTooSmall(usize),
}

/// Invalid roster input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Two entities share a name.
    #[error("duplicate entity name `{0}`")]
    DuplicateName(String),

    /// A preference or avoidance names an entity that is not in the roster.
    #[error("`{referrer}` references unknown entity `{name}`")]
    UnknownReference {
        /// Entity whose list contains the unknown name.
        referrer: String,
        /// The unresolved name.
        name: String,
    },

    /// An entity prefers or avoids itself.
    #[error("entity `{0}` references itself")]
    SelfReference(String),

    /// The roster contains no entities.
    #[error("roster is empty")]
    Empty,
}

/// Top-level error type for seatplan operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Invalid roster.
    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),

    /// Selection called with a negative weight or a non-positive total.
    ///
    /// Fitness-proportionate selection requires non-negative weights
    /// summing to a positive total; callers shift or clip raw scores
    /// before selecting.
    #[error("selection weights must be non-negative and sum to a positive total, got total {total}")]
    SelectionPrecondition {
        /// Sum of the offending weights.
        total: f64,
    },
}

/// Result type alias for seatplan operations.
pub type Result<T> = std::result::Result<T, Error>;
