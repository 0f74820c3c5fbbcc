//! Genetic search strategy.
//!
//! Population-based evolution over whole partitions: fitness-proportionate
//! parent selection, pool-reshuffle crossover, probabilistic cross-group
//! swap mutation, and elitist retention of the selected parents each
//! generation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: run parameters (groups, population, generations, rates)
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best partition found plus run statistics
//! - [`GenerationStats`]: periodic progress snapshot for observers
//!
//! # Submodules
//!
//! - [`operators`]: crossover and mutation over partitions
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;

pub use config::GaConfig;
pub use population::{generate_population, random_partition};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::select_parents;
