//! Greedy + hill-climb local search strategy.
//!
//! A single candidate partition is built by preference-maximizing greedy
//! placement, then refined by accept/reject pairwise swap search against
//! the shared evaluator. Multiple independent trials restart from fresh
//! shuffles and the best-scoring result wins.
//!
//! # Key Types
//!
//! - [`ClimbConfig`]: run parameters (groups, iteration budget, trials)
//! - [`ClimbRunner`]: executes the multi-trial loop
//! - [`ClimbResult`]: best partition found plus per-trial statistics
//! - [`greedy_assign`] / [`GreedyOutcome`]: standalone greedy constructor
//!   with explicit partial-seating reporting
//!
//! # References
//!
//! - Hoos & Stützle (2004), *Stochastic Local Search: Foundations and
//!   Applications*

mod config;
mod greedy;
mod runner;

pub use config::ClimbConfig;
pub use greedy::{greedy_assign, GreedyOutcome};
pub use runner::{ClimbResult, ClimbRunner};
