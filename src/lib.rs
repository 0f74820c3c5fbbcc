//! Preference-driven group assignment engine.
//!
//! Partitions a fixed roster of entities (students, attendees, team members)
//! into a fixed number of equal-capacity groups, maximizing satisfied
//! preferences while penalizing co-placement of entities that avoid each
//! other. A Gini-coefficient fairness term keeps satisfaction from
//! concentrating in a few groups.
//!
//! Two independent search strategies optimize the same model and evaluator:
//!
//! - **Genetic search** ([`ga`]): population-based evolution with
//!   fitness-proportionate selection, pool-reshuffle crossover, and
//!   pairwise-swap mutation.
//! - **Greedy + hill-climb** ([`climb`]): preference-maximizing greedy
//!   construction refined by accept/reject swap search, restarted across
//!   independent trials.
//!
//! The strategies never call each other; [`strategy::solve`] dispatches
//! between them behind a tagged [`Strategy`] value.
//!
//! # Quick start
//!
//! ```
//! use seatplan::model::RosterBuilder;
//! use seatplan::climb::{ClimbConfig, ClimbRunner};
//!
//! let mut builder = RosterBuilder::new();
//! builder.entity("Alice", &["Bob"], &[]);
//! builder.entity("Bob", &["Alice"], &[]);
//! builder.entity("Carol", &["Alice"], &[]);
//! builder.entity("Dan", &["Carol"], &[]);
//! let roster = builder.build().unwrap();
//!
//! let config = ClimbConfig::new(2, 2).with_trials(4).with_seed(7);
//! let result = ClimbRunner::run(&roster, &config).unwrap();
//! assert!(result.unseated.is_empty());
//! ```
//!
//! # Determinism
//!
//! Every runner takes an optional seed; all randomness flows from a single
//! explicitly threaded generator, so seeded runs are fully reproducible.

pub mod climb;
pub mod error;
pub mod ga;
pub mod model;
pub mod random;
pub mod scoring;
pub mod strategy;

pub use error::{ConfigError, Error, Result, RosterError};
pub use model::{Entity, EntityId, Group, Partition, Roster, RosterBuilder};
pub use scoring::{evaluate, Evaluation, Objective};
pub use strategy::{solve, Solution, Strategy};
