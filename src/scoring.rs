//! Partition scoring: preference satisfaction, avoidance penalty, and
//! Gini-based fairness adjustment.
//!
//! Both search strategies optimize [`evaluate`] as their objective
//! function. Two named scoring strategies exist:
//!
//! - [`Objective::Balanced`]: one point per satisfied preference, minus one
//!   per avoidance co-placement, adjusted by how evenly satisfaction is
//!   spread across groups.
//! - [`Objective::Coverage`]: one point per entity with *any* satisfied
//!   preference, plus a flat bonus when nobody is left without one.
//!
//! Evaluation is pure: scoring the same partition twice yields identical
//! results.
//!
//! # References
//!
//! - Gini (1912), *Variabilità e mutabilità*
//! - Dorfman (1979), "A Formula for the Gini Coefficient"

use crate::model::{Partition, Roster};

/// Reward/penalty scale of the fairness adjustment, and the flat bonus for
/// full coverage under [`Objective::Coverage`].
const FAIRNESS_SCALE: f64 = 10.0;

/// Named scoring strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Cumulative satisfaction with avoidance penalty and fairness
    /// adjustment.
    ///
    /// Each preference a member finds satisfied in its group scores +1 and
    /// counts toward that group's satisfaction tally; each avoided entity
    /// sharing a group scores −1 (tallies unaffected). The Gini
    /// coefficient of the per-group tallies, rounded to two decimals, then
    /// adjusts the score: below 0.5 it earns `10 − gini·10`, otherwise it
    /// costs `gini·10`.
    #[default]
    Balanced,

    /// Per-entity any-preference satisfaction with a full-coverage bonus.
    ///
    /// Each seated entity with at least one preference satisfied in its
    /// group scores +1 — no matter how many are satisfied — and a flat +10
    /// lands when every seated entity has one. Avoidance and fairness do
    /// not participate; the reported Gini is 0.
    Coverage,
}

/// Result of scoring one partition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// The adjusted objective value. Higher is better.
    pub score: f64,
    /// Gini coefficient of per-group satisfaction counts, in `[0, 1]`.
    /// 0 means perfectly even satisfaction (including the no-satisfaction
    /// fallback); values toward 1 mean satisfaction concentrated in few
    /// groups.
    pub gini: f64,
}

/// Scores a partition under the given objective.
pub fn evaluate(roster: &Roster, partition: &Partition, objective: Objective) -> Evaluation {
    match objective {
        Objective::Balanced => balanced(roster, partition),
        Objective::Coverage => coverage(roster, partition),
    }
}

fn balanced(roster: &Roster, partition: &Partition) -> Evaluation {
    let mut raw: i64 = 0;
    let mut counts: Vec<u64> = Vec::with_capacity(partition.num_groups());

    for group in partition.groups() {
        let mut group_count: u64 = 0;
        for &member in group.members() {
            for &preferred in &roster.get(member).prefers {
                if group.contains(preferred) {
                    raw += 1;
                    group_count += 1;
                }
            }
        }
        counts.push(group_count);
    }

    for group in partition.groups() {
        for &member in group.members() {
            for &avoided in &roster.get(member).avoids {
                if group.contains(avoided) {
                    raw -= 1;
                }
            }
        }
    }

    let mut score = raw as f64;

    // With no satisfied preference anywhere the Gini denominator is zero;
    // the defined fallback is gini = 0 with no fairness term at all.
    if counts.iter().all(|&c| c == 0) {
        return Evaluation { score, gini: 0.0 };
    }

    let gini = gini_coefficient(&counts);
    let rounded = (gini * 100.0).round() / 100.0;
    if (0.0..0.5).contains(&gini) {
        score += FAIRNESS_SCALE - rounded * FAIRNESS_SCALE;
    } else {
        score -= rounded * FAIRNESS_SCALE;
    }

    Evaluation { score, gini }
}

fn coverage(roster: &Roster, partition: &Partition) -> Evaluation {
    let mut score = 0.0;
    let mut everyone_satisfied = true;

    for group in partition.groups() {
        for &member in group.members() {
            let satisfied = roster
                .get(member)
                .prefers
                .iter()
                .any(|&preferred| group.contains(preferred));
            if satisfied {
                score += 1.0;
            } else {
                everyone_satisfied = false;
            }
        }
    }

    if everyone_satisfied {
        score += FAIRNESS_SCALE;
    }

    Evaluation { score, gini: 0.0 }
}

/// Gini coefficient of a set of non-negative counts.
///
/// Sorts ascending and applies the 1-based rank formula
/// `(2·Σ i·cᵢ − (n+1)·S) / (n·S)` where `S` is the total. Returns 0 when
/// `S` is zero (perfect equality by definition, and the only way to keep
/// the all-zero case finite).
pub fn gini_coefficient(counts: &[u64]) -> f64 {
    let n = counts.len();
    let total: u64 = counts.iter().sum();
    if n == 0 || total == 0 {
        return 0.0;
    }

    let mut sorted: Vec<u64> = counts.to_vec();
    sorted.sort_unstable();

    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as f64 + 1.0) * c as f64)
        .sum();
    let s = total as f64;

    (2.0 * weighted - (n as f64 + 1.0) * s) / (n as f64 * s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RosterBuilder;

    /// Roster of `names` where each entity prefers every other.
    fn mutual_roster(names: &[&str]) -> Roster {
        let mut builder = RosterBuilder::new();
        for &name in names {
            let others: Vec<&str> = names.iter().copied().filter(|&n| n != name).collect();
            builder.entity(name, &others, &[]);
        }
        builder.build().unwrap()
    }

    fn seat_all(roster: &Roster, num_groups: usize, group_size: usize) -> Partition {
        let mut partition = Partition::new(num_groups, group_size);
        for (i, id) in roster.ids().enumerate() {
            assert!(partition.insert_into(i / group_size, id));
        }
        partition
    }

    // ---- Gini ----

    #[test]
    fn test_gini_equal_counts_is_zero() {
        assert_eq!(gini_coefficient(&[3, 3, 3, 3]), 0.0);
        assert_eq!(gini_coefficient(&[7]), 0.0);
    }

    #[test]
    fn test_gini_all_zero_fallback() {
        assert_eq!(gini_coefficient(&[0, 0, 0]), 0.0);
        assert_eq!(gini_coefficient(&[]), 0.0);
    }

    #[test]
    fn test_gini_total_concentration() {
        // All satisfaction in one of n groups approaches (n-1)/n.
        let g = gini_coefficient(&[0, 0, 0, 12]);
        assert!((g - 0.75).abs() < 1e-12, "got {g}");
    }

    #[test]
    fn test_gini_within_unit_interval() {
        for counts in [
            vec![1, 2, 3, 4],
            vec![0, 0, 5],
            vec![10, 1],
            vec![2, 2, 8, 0, 3],
        ] {
            let g = gini_coefficient(&counts);
            assert!((0.0..=1.0).contains(&g), "gini {g} out of range for {counts:?}");
        }
    }

    #[test]
    fn test_gini_known_value() {
        // counts [1, 3]: (2*(1*1 + 2*3) - 3*4) / (2*4) = 2/8
        assert!((gini_coefficient(&[3, 1]) - 0.25).abs() < 1e-12);
    }

    // ---- Balanced objective ----

    #[test]
    fn test_mutual_clique_single_group() {
        // Four entities all preferring each other at one table of four:
        // 4 * 3 = 12 raw points, one group so gini = 0, bonus +10.
        let roster = mutual_roster(&["A", "B", "C", "D"]);
        let partition = seat_all(&roster, 1, 4);

        let eval = evaluate(&roster, &partition, Objective::Balanced);
        assert_eq!(eval.score, 22.0);
        assert_eq!(eval.gini, 0.0);
    }

    #[test]
    fn test_disjoint_triples_prefer_staying_together() {
        // Two mutual triples across two groups of three. Keeping the
        // triples intact is the unique maximum; any split scores lower.
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
        let roster = builder.build().unwrap();

        let intact = seat_all(&roster, 2, 3);
        let best = evaluate(&roster, &intact, Objective::Balanced);
        assert_eq!(best.score, 22.0); // 6 + 6 raw, gini 0, +10

        // Swap one member across the triples.
        let mut split = intact.clone();
        split.swap_between(0, 2, 1, 0);
        let worse = evaluate(&roster, &split, Objective::Balanced);
        assert!(
            worse.score < best.score,
            "split triples must score lower: {} vs {}",
            worse.score,
            best.score
        );
    }

    #[test]
    fn test_avoidance_costs_exactly_one_point() {
        let mut builder = RosterBuilder::new();
        builder.entity("A", &["B"], &["C"]);
        builder.entity("B", &["A"], &[]);
        builder.entity("C", &[], &[]);
        builder.entity("D", &[], &[]);
        let roster = builder.build().unwrap();
        let a = roster.id_of("A").unwrap();
        let b = roster.id_of("B").unwrap();
        let c = roster.id_of("C").unwrap();
        let d = roster.id_of("D").unwrap();

        let mut with_avoided = Partition::new(2, 2);
        with_avoided.insert_into(0, a);
        with_avoided.insert_into(0, c);
        with_avoided.insert_into(1, b);
        with_avoided.insert_into(1, d);

        let mut without = Partition::new(2, 2);
        without.insert_into(0, a);
        without.insert_into(0, d);
        without.insert_into(1, b);
        without.insert_into(1, c);

        let penalized = evaluate(&roster, &with_avoided, Objective::Balanced);
        let clean = evaluate(&roster, &without, Objective::Balanced);
        // Identical satisfaction layout, one extra co-placed avoidance.
        assert_eq!(penalized.gini, clean.gini);
        assert_eq!(clean.score - penalized.score, 1.0);
    }

    #[test]
    fn test_no_satisfaction_fallback_no_fairness_term() {
        // Nobody's preference is satisfiable: raw score 0, gini 0, and no
        // +10 bonus despite "perfect equality".
        let mut builder = RosterBuilder::new();
        builder.entity("A", &["B"], &[]);
        builder.entity("B", &["A"], &[]);
        let roster = builder.build().unwrap();

        let mut partition = Partition::new(2, 1);
        partition.insert_into(0, roster.id_of("A").unwrap());
        partition.insert_into(1, roster.id_of("B").unwrap());

        let eval = evaluate(&roster, &partition, Objective::Balanced);
        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.gini, 0.0);
    }

    #[test]
    fn test_unbalanced_satisfaction_penalized() {
        // Six mutually-preferring entities crammed into one of two groups
        // of six: counts [30, 0], gini 0.5 -> penalty branch.
        let roster = mutual_roster(&["A", "B", "C", "D", "E", "F"]);
        let mut partition = Partition::new(2, 6);
        for id in roster.ids() {
            partition.insert_into(0, id);
        }

        let eval = evaluate(&roster, &partition, Objective::Balanced);
        assert!((eval.gini - 0.5).abs() < 1e-12);
        assert_eq!(eval.score, 30.0 - 5.0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let roster = mutual_roster(&["A", "B", "C", "D", "E", "F"]);
        let partition = seat_all(&roster, 2, 3);

        let first = evaluate(&roster, &partition, Objective::Balanced);
        let second = evaluate(&roster, &partition, Objective::Balanced);
        assert_eq!(first, second);
    }

    #[test]
    fn test_directional_preference_not_mutual() {
        // A prefers B, B prefers nobody: exactly one satisfied preference.
        let mut builder = RosterBuilder::new();
        builder.entity("A", &["B"], &[]);
        builder.entity("B", &[], &[]);
        let roster = builder.build().unwrap();
        let partition = seat_all(&roster, 1, 2);

        let eval = evaluate(&roster, &partition, Objective::Balanced);
        // 1 raw + 10 bonus (single group, gini 0).
        assert_eq!(eval.score, 11.0);
    }

    // ---- Coverage objective ----

    #[test]
    fn test_coverage_counts_entities_not_preferences() {
        // A has three satisfied preferences but contributes one point.
        let roster = mutual_roster(&["A", "B", "C", "D"]);
        let partition = seat_all(&roster, 1, 4);

        let eval = evaluate(&roster, &partition, Objective::Coverage);
        // 4 entities covered + full-coverage bonus.
        assert_eq!(eval.score, 14.0);
        assert_eq!(eval.gini, 0.0);
    }

    #[test]
    fn test_coverage_bonus_requires_everyone() {
        let mut builder = RosterBuilder::new();
        builder.entity("A", &["B"], &[]);
        builder.entity("B", &["A"], &[]);
        builder.entity("C", &["A"], &[]);
        builder.entity("D", &["C"], &[]);
        let roster = builder.build().unwrap();
        // {A, B} together, {C, D} together: A, B, D covered; C is not.
        let partition = seat_all(&roster, 2, 2);

        let eval = evaluate(&roster, &partition, Objective::Coverage);
        assert_eq!(eval.score, 3.0);
    }

    #[test]
    fn test_coverage_ignores_avoidance() {
        let mut builder = RosterBuilder::new();
        builder.entity("A", &["B"], &["B"]);
        builder.entity("B", &["A"], &[]);
        let roster = builder.build().unwrap();
        let partition = seat_all(&roster, 1, 2);

        let eval = evaluate(&roster, &partition, Objective::Coverage);
        assert_eq!(eval.score, 12.0);
    }

    // ---- Cross-roster id misuse guard ----

    #[test]
    #[should_panic]
    fn test_foreign_id_panics() {
        let small = mutual_roster(&["A", "B"]);
        let big = mutual_roster(&["A", "B", "C", "D"]);
        let mut partition = Partition::new(1, 4);
        for id in big.ids() {
            partition.insert_into(0, id);
        }
        // Ids from `big` indexed against `small` must fail loudly.
        let _ = evaluate(&small, &partition, Objective::Balanced);
    }
}
