//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat,
//! retaining the selected parents unmutated each generation and tracking
//! the best partition ever evaluated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::GaConfig;
use super::operators;
use super::population::generate_population;
use super::selection::select_parents;
use crate::error::Result;
use crate::model::{Partition, Roster};
use crate::random::create_rng;
use crate::scoring::{evaluate, Objective};

/// Progress snapshot handed to observers every `report_every` generations.
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    /// Generation index, 0-based.
    pub generation: usize,
    /// Best score seen so far across the whole run.
    pub best_score: f64,
    /// Mean score of the current generation.
    pub mean_score: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best partition evaluated during the entire run.
    pub best: Partition,

    /// Score of [`best`](Self::best) under the configured objective.
    pub best_score: f64,

    /// Gini fairness of the best partition.
    pub gini: f64,

    /// Number of generations actually evaluated.
    pub generations: usize,

    /// Best-ever score after each evaluated generation.
    pub history: Vec<f64>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the genetic search.
///
/// # Usage
///
/// ```
/// use seatplan::model::RosterBuilder;
/// use seatplan::ga::{GaConfig, GaRunner};
///
/// let mut builder = RosterBuilder::new();
/// builder.entity("Alice", &["Bob"], &[]);
/// builder.entity("Bob", &["Alice"], &[]);
/// builder.entity("Carol", &["Bob"], &[]);
/// builder.entity("Dan", &["Carol"], &[]);
/// let roster = builder.build().unwrap();
///
/// let config = GaConfig::new(2, 2).with_generations(50).with_seed(42);
/// let result = GaRunner::run(&roster, &config).unwrap();
/// assert!(result.best_score > 0.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to its full generation budget.
    pub fn run(roster: &Roster, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(roster, config, None, |_| {})
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is polled once per generation boundary; a set flag stops
    /// the run and returns the best found so far. Cancellation never
    /// alters the outputs of a run that completes.
    pub fn run_with_cancel(
        roster: &Roster,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        Self::run_with_observer(roster, config, cancel, |_| {})
    }

    /// Runs the GA, reporting [`GenerationStats`] to `observer` every
    /// [`report_every`](GaConfig::report_every) generations.
    ///
    /// Reporting is a presentation concern: the observer receives copies
    /// and cannot influence the search.
    pub fn run_with_observer<F>(
        roster: &Roster,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<GaResult>
    where
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let mut population = generate_population(
            roster,
            config.num_groups,
            config.group_size,
            config.population_size,
            &mut rng,
        )?;

        let num_parents = config.population_size / 2;
        let num_offspring = config.population_size - num_parents;

        let mut best: Option<(Partition, f64)> = None;
        let mut history = Vec::with_capacity(config.generations);
        let mut cancelled = false;

        for generation in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let scores = evaluate_population(roster, &population, config.objective);
            track_best(&mut best, &population, &scores);
            let best_score = best.as_ref().map(|(_, s)| *s).unwrap_or(f64::NEG_INFINITY);
            history.push(best_score);

            if config.report_every > 0 && generation % config.report_every == 0 {
                observer(&GenerationStats {
                    generation,
                    best_score,
                    mean_score: scores.iter().sum::<f64>() / scores.len() as f64,
                });
            }

            // Raw scores can be negative (avoidance-dominated partitions);
            // shift them so the selection precondition always holds.
            let parent_indices = select_parents(&shifted(&scores), num_parents, &mut rng)?;
            let parents: Vec<Partition> = parent_indices
                .iter()
                .map(|&i| population[i].clone())
                .collect();

            let mut offspring: Vec<Partition> = (0..num_offspring)
                .map(|_| operators::crossover(&parents, &mut rng))
                .collect();
            for child in &mut offspring {
                operators::mutate(child, config.mutation_rate, &mut rng);
            }

            // Parents survive unmutated; offspring fill the rest.
            population = parents;
            population.append(&mut offspring);
        }

        // A zero-generation budget (or instant cancellation) still yields
        // the best of the evaluated initial population.
        if best.is_none() {
            let scores = evaluate_population(roster, &population, config.objective);
            track_best(&mut best, &population, &scores);
        }

        let (best_partition, best_score) =
            best.expect("population is non-empty, so a best always exists");
        let gini = evaluate(roster, &best_partition, config.objective).gini;

        Ok(GaResult {
            best: best_partition,
            best_score,
            gini,
            generations: history.len(),
            history,
            cancelled,
        })
    }
}

/// Scores every candidate. Evaluation is pure, so the parallel path is
/// observationally identical to the sequential one.
fn evaluate_population(roster: &Roster, population: &[Partition], objective: Objective) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        population
            .par_iter()
            .map(|p| evaluate(roster, p, objective).score)
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        population
            .iter()
            .map(|p| evaluate(roster, p, objective).score)
            .collect()
    }
}

/// Replaces the incumbent only on strict improvement; ties keep it. The
/// generation's argmax is the first index reaching the maximum.
fn track_best(best: &mut Option<(Partition, f64)>, population: &[Partition], scores: &[f64]) {
    let mut top = 0;
    for (i, &score) in scores.iter().enumerate() {
        if score > scores[top] {
            top = i;
        }
    }
    let improves = match best {
        Some((_, incumbent)) => scores[top] > *incumbent,
        None => true,
    };
    if improves {
        *best = Some((population[top].clone(), scores[top]));
    }
}

fn shifted(scores: &[f64]) -> Vec<f64> {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    scores.iter().map(|&s| s - min + 1.0).collect()
}
