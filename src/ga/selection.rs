//! Fitness-proportionate parent selection.
//!
//! Standard roulette-wheel sampling: a candidate's chance of seeding the
//! next generation is proportional to its weight. Indices are drawn
//! *without replacement*, so the selected parents are distinct partitions
//! of the current population.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use crate::error::Error;

/// Samples `num_parents` distinct population indices, each draw
/// proportional to its weight among the not-yet-chosen candidates.
///
/// Weights must be non-negative and sum to a positive total; raw scores
/// that can go negative (avoidance-heavy partitions) must be shifted by
/// the caller first. Violations return
/// [`Error::SelectionPrecondition`] rather than being masked.
///
/// # Panics
/// Panics if `num_parents` exceeds the population size.
pub fn select_parents<R: Rng>(
    weights: &[f64],
    num_parents: usize,
    rng: &mut R,
) -> Result<Vec<usize>, Error> {
    let n = weights.len();
    assert!(
        num_parents <= n,
        "cannot select {num_parents} parents from {n} candidates"
    );

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || weights.iter().any(|&w| w < 0.0) {
        return Err(Error::SelectionPrecondition { total });
    }

    let mut chosen = vec![false; n];
    let mut picks = Vec::with_capacity(num_parents);
    let mut remaining = total;

    for _ in 0..num_parents {
        let pick = if remaining > 0.0 {
            spin(weights, &chosen, remaining, rng)
        } else {
            // Only zero-weight candidates left; fall back to uniform.
            uniform_unchosen(&chosen, rng)
        };
        chosen[pick] = true;
        remaining -= weights[pick];
        picks.push(pick);
    }

    Ok(picks)
}

/// One roulette spin over the unchosen candidates.
fn spin<R: Rng>(weights: &[f64], chosen: &[bool], remaining: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..remaining);
    let mut cumulative = 0.0;
    let mut last_unchosen = 0;
    for (i, &w) in weights.iter().enumerate() {
        if chosen[i] {
            continue;
        }
        last_unchosen = i;
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    last_unchosen // floating-point fallback
}

fn uniform_unchosen<R: Rng>(chosen: &[bool], rng: &mut R) -> usize {
    let open: Vec<usize> = (0..chosen.len()).filter(|&i| !chosen[i]).collect();
    open[rng.random_range(0..open.len())]
}
