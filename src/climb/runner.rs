//! Hill-climb execution and multi-trial restart.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use super::config::ClimbConfig;
use super::greedy::greedy_assign;
use crate::error::{ConfigError, Result};
use crate::model::{EntityId, Partition, Roster};
use crate::random::create_rng;
use crate::scoring::{evaluate, Objective};

/// Result of a multi-trial local-search run.
#[derive(Debug, Clone)]
pub struct ClimbResult {
    /// The best partition across all trials.
    pub best: Partition,

    /// Score of [`best`](Self::best) under the configured objective.
    pub best_score: f64,

    /// Gini fairness of the best partition.
    pub gini: f64,

    /// Index of the trial that produced the best partition.
    pub best_trial: usize,

    /// Final score of every completed trial, in trial order.
    pub trial_scores: Vec<f64>,

    /// Entities the winning trial's greedy construction could not seat.
    /// Empty whenever the configured capacity covers the roster, which
    /// the runner enforces up front.
    pub unseated: Vec<EntityId>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes greedy construction plus hill-climbing, restarted across
/// independent trials.
///
/// # Usage
///
/// ```
/// use seatplan::model::RosterBuilder;
/// use seatplan::climb::{ClimbConfig, ClimbRunner};
///
/// let mut builder = RosterBuilder::new();
/// builder.entity("Alice", &["Bob"], &[]);
/// builder.entity("Bob", &["Alice"], &[]);
/// builder.entity("Carol", &["Bob"], &[]);
/// builder.entity("Dan", &["Carol"], &[]);
/// let roster = builder.build().unwrap();
///
/// let config = ClimbConfig::new(2, 2).with_iterations(200).with_seed(42);
/// let result = ClimbRunner::run(&roster, &config).unwrap();
/// assert!(result.best_score > 0.0);
/// ```
pub struct ClimbRunner;

impl ClimbRunner {
    /// Runs every trial to its full budget.
    pub fn run(roster: &Roster, config: &ClimbConfig) -> Result<ClimbResult> {
        Self::run_with_cancel(roster, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is polled at trial boundaries; the first trial always
    /// runs, so even an immediately cancelled run returns a usable
    /// result. Cancellation never alters the outputs of a run that
    /// completes.
    pub fn run_with_cancel(
        roster: &Roster,
        config: &ClimbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ClimbResult> {
        config.validate()?;
        let capacity = config.num_groups * config.group_size;
        if capacity < roster.len() {
            return Err(ConfigError::InsufficientCapacity {
                capacity,
                required: roster.len(),
            }
            .into());
        }

        let mut rng = create_rng(config.seed);
        let mut best: Option<(Partition, f64, Vec<EntityId>, usize)> = None;
        let mut trial_scores = Vec::with_capacity(config.trials);
        let mut cancelled = false;

        for trial in 0..config.trials {
            if trial > 0 {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        cancelled = true;
                        break;
                    }
                }
            }

            let outcome = greedy_assign(roster, config.num_groups, config.group_size, &mut rng);
            let (climbed, score) = hill_climb(
                roster,
                outcome.partition,
                config.iterations,
                config.objective,
                &mut rng,
            );
            trial_scores.push(score);

            let improves = match best {
                Some((_, incumbent, _, _)) => score > incumbent,
                None => true,
            };
            if improves {
                best = Some((climbed, score, outcome.unseated, trial));
            }
        }

        let (best_partition, best_score, unseated, best_trial) =
            best.expect("at least one trial always runs");
        let gini = evaluate(roster, &best_partition, config.objective).gini;

        Ok(ClimbResult {
            best: best_partition,
            best_score,
            gini,
            best_trial,
            trial_scores,
            unseated,
            cancelled,
        })
    }
}

/// Refines a partition by random pairwise swaps under a fixed budget.
///
/// Each iteration draws two distinct groups; a drawn empty group consumes
/// the iteration. A swap survives only when it strictly beats the best
/// score seen so far, in which case the best snapshot is a deep copy
/// decoupled from the working partition; otherwise the swap is reverted.
fn hill_climb<R: Rng>(
    roster: &Roster,
    mut current: Partition,
    iterations: usize,
    objective: Objective,
    rng: &mut R,
) -> (Partition, f64) {
    let mut best_score = evaluate(roster, &current, objective).score;
    let num_groups = current.num_groups();
    if num_groups < 2 {
        return (current, best_score);
    }
    let mut best = current.clone();

    for _ in 0..iterations {
        let group_a = rng.random_range(0..num_groups);
        let mut group_b = rng.random_range(0..num_groups);
        while group_b == group_a {
            group_b = rng.random_range(0..num_groups);
        }
        if current.groups()[group_a].is_empty() || current.groups()[group_b].is_empty() {
            continue;
        }

        let pos_a = rng.random_range(0..current.groups()[group_a].len());
        let pos_b = rng.random_range(0..current.groups()[group_b].len());
        current.swap_between(group_a, pos_a, group_b, pos_b);

        let score = evaluate(roster, &current, objective).score;
        if score > best_score {
            best_score = score;
            best = current.clone();
        } else {
            current.swap_between(group_a, pos_a, group_b, pos_b);
        }
    }

    (best, best_score)
}
