//! Preference-maximizing greedy construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{EntityId, Partition, Roster};

/// Outcome of one greedy construction.
///
/// `unseated` lists every entity no group could take, in placement order.
/// A partial seating is an explicit, reported result — callers decide
/// whether to continue with it or treat it as fatal. Through
/// [`ClimbRunner`](super::ClimbRunner) the capacity check makes it
/// unreachable; the standalone constructor reports it regardless.
#[derive(Debug, Clone)]
pub struct GreedyOutcome {
    /// The constructed (possibly partial) partition.
    pub partition: Partition,
    /// Entities left without a seat because every group was full.
    pub unseated: Vec<EntityId>,
}

/// Builds one partition by preference-maximizing placement.
///
/// The roster is visited in shuffled order. Each entity goes to the group
/// with spare capacity holding the most already-placed entities it
/// prefers; on ties the first group reaching the maximum wins, so
/// placement is deterministic given the shuffle.
pub fn greedy_assign<R: Rng>(
    roster: &Roster,
    num_groups: usize,
    group_size: usize,
    rng: &mut R,
) -> GreedyOutcome {
    let mut order: Vec<EntityId> = roster.ids().collect();
    order.shuffle(rng);

    let mut partition = Partition::new(num_groups, group_size);
    let mut unseated = Vec::new();

    for id in order {
        let prefers = &roster.get(id).prefers;

        let mut best: Option<usize> = None;
        let mut max_preferred: i64 = -1;
        for (group_idx, group) in partition.groups().iter().enumerate() {
            if group.is_full() {
                continue;
            }
            let placed_preferred = group
                .members()
                .iter()
                .filter(|member| prefers.contains(member))
                .count() as i64;
            if placed_preferred > max_preferred {
                best = Some(group_idx);
                max_preferred = placed_preferred;
            }
        }

        match best {
            Some(group_idx) => {
                let inserted = partition.insert_into(group_idx, id);
                debug_assert!(inserted, "chosen group had spare capacity");
            }
            None => unseated.push(id),
        }
    }

    GreedyOutcome { partition, unseated }
}
