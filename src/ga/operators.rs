//! Genetic operators over partitions.
//!
//! Both operators conserve membership: crossover reseats exactly the
//! entities of the parent it copies, and mutation only exchanges members
//! between groups. Neither can duplicate an entity or change group
//! capacities.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::model::Partition;

/// Produces one offspring from two distinct parents sampled uniformly.
///
/// The offspring takes the first sampled parent's group shape, pools its
/// members, shuffles the pool, and refills the groups greedily to
/// capacity. The mate only biases which parent seeds the child; its
/// memberships do not enter the offspring.
///
/// TODO: blend intact groups from both parents and repair duplicates, so
/// the mate's material survives recombination.
///
/// # Panics
/// Panics if fewer than two parents are supplied.
pub fn crossover<R: Rng>(parents: &[Partition], rng: &mut R) -> Partition {
    assert!(
        parents.len() >= 2,
        "crossover requires at least two parents"
    );

    let first = rng.random_range(0..parents.len());
    let mut second = rng.random_range(0..parents.len());
    while second == first {
        second = rng.random_range(0..parents.len());
    }
    let template = &parents[first];

    let mut pool = template.members_pool();
    pool.shuffle(rng);

    let mut child = template.empty_like();
    for group_idx in 0..child.num_groups() {
        while !child.groups()[group_idx].is_full() {
            let Some(id) = pool.pop() else {
                return child;
            };
            let inserted = child.insert_into(group_idx, id);
            debug_assert!(inserted, "pooled members are distinct");
        }
    }
    child
}

/// Mutates a partition in place by probabilistic cross-group swaps.
///
/// Every member slot independently triggers with probability
/// `mutation_rate`; a triggered slot swaps its member with a uniformly
/// random member of a uniformly random *other* non-empty group. No-op
/// when fewer than two groups hold members. Capacities and group sizes
/// never change.
///
/// # Panics
/// Panics if `mutation_rate` is outside `[0, 1]`.
pub fn mutate<R: Rng>(partition: &mut Partition, mutation_rate: f64, rng: &mut R) {
    let num_groups = partition.num_groups();
    for group_idx in 0..num_groups {
        for pos in 0..partition.groups()[group_idx].len() {
            if !rng.random_bool(mutation_rate) {
                continue;
            }
            let partners: Vec<usize> = (0..num_groups)
                .filter(|&j| j != group_idx && !partition.groups()[j].is_empty())
                .collect();
            let Some(&partner) = partners.choose(rng) else {
                continue;
            };
            let partner_pos = rng.random_range(0..partition.groups()[partner].len());
            partition.swap_between(group_idx, pos, partner, partner_pos);
        }
    }
}
