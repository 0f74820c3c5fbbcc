//! Tagged strategy dispatch.
//!
//! Both engines optimize the same model and evaluator but never call each
//! other. [`solve`] is the single entry point that picks one by tag and
//! normalizes its result into a [`Solution`], so callers that do not care
//! which engine runs can treat the choice as data.

use crate::climb::{ClimbConfig, ClimbRunner};
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::model::{EntityId, Partition, Roster};

/// Which search engine to run, with its full configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Population-based genetic search.
    Genetic(GaConfig),
    /// Greedy construction plus hill-climbing with multi-trial restart.
    LocalSearch(ClimbConfig),
}

/// Strategy-independent view of a finished run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The best partition found.
    pub partition: Partition,
    /// Its score under the strategy's configured objective.
    pub score: f64,
    /// Its Gini fairness value.
    pub gini: f64,
    /// Entities left unseated by the winning construction. Always empty
    /// for the genetic strategy; empty for local search whenever capacity
    /// covers the roster.
    pub unseated: Vec<EntityId>,
}

/// Runs the selected strategy to completion.
///
/// # Examples
///
/// ```
/// use seatplan::model::RosterBuilder;
/// use seatplan::climb::ClimbConfig;
/// use seatplan::strategy::{solve, Strategy};
///
/// let mut builder = RosterBuilder::new();
/// builder.entity("Alice", &["Bob"], &[]);
/// builder.entity("Bob", &["Alice"], &[]);
/// builder.entity("Carol", &["Bob"], &[]);
/// builder.entity("Dan", &["Carol"], &[]);
/// let roster = builder.build().unwrap();
///
/// let strategy = Strategy::LocalSearch(
///     ClimbConfig::new(2, 2).with_iterations(200).with_seed(42),
/// );
/// let solution = solve(&roster, &strategy).unwrap();
/// assert!(solution.unseated.is_empty());
/// ```
pub fn solve(roster: &Roster, strategy: &Strategy) -> Result<Solution> {
    match strategy {
        Strategy::Genetic(config) => {
            let result = GaRunner::run(roster, config)?;
            Ok(Solution {
                partition: result.best,
                score: result.best_score,
                gini: result.gini,
                unseated: Vec::new(),
            })
        }
        Strategy::LocalSearch(config) => {
            let result = ClimbRunner::run(roster, config)?;
            Ok(Solution {
                partition: result.best,
                score: result.best_score,
                gini: result.gini,
                unseated: result.unseated,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RosterBuilder;

    fn triples_roster() -> Roster {
        let mut builder = RosterBuilder::new();
        for (name, others) in [
            ("A", ["B", "C"]),
            ("B", ["A", "C"]),
            ("C", ["A", "B"]),
            ("D", ["E", "F"]),
            ("E", ["D", "F"]),
            ("F", ["D", "E"]),
        ] {
            builder.entity(name, &others, &[]);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_both_strategies_reach_the_same_optimum() {
        let roster = triples_roster();

        let genetic = Strategy::Genetic(
            GaConfig::new(2, 3)
                .with_population_size(30)
                .with_generations(120)
                .with_seed(42),
        );
        let local = Strategy::LocalSearch(
            ClimbConfig::new(2, 3)
                .with_iterations(400)
                .with_trials(5)
                .with_seed(42),
        );

        let a = solve(&roster, &genetic).unwrap();
        let b = solve(&roster, &local).unwrap();
        assert_eq!(a.score, 22.0);
        assert_eq!(b.score, 22.0);
        a.partition.assert_valid(&roster, true);
        b.partition.assert_valid(&roster, true);
    }

    #[test]
    fn test_configuration_errors_propagate() {
        let roster = triples_roster();
        let strategy = Strategy::Genetic(GaConfig::new(1, 2).with_seed(1));
        assert!(solve(&roster, &strategy).is_err());
    }
}
