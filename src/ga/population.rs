//! Initial population construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConfigError;
use crate::model::{Partition, Roster};

/// Builds `population_size` independent random valid partitions.
///
/// Fails with [`ConfigError::InsufficientCapacity`] before any shuffling
/// when `num_groups * group_size` cannot seat the roster.
pub fn generate_population<R: Rng>(
    roster: &Roster,
    num_groups: usize,
    group_size: usize,
    population_size: usize,
    rng: &mut R,
) -> Result<Vec<Partition>, ConfigError> {
    check_capacity(roster, num_groups, group_size)?;
    Ok((0..population_size)
        .map(|_| place_randomly(roster, num_groups, group_size, rng))
        .collect())
}

/// Builds one random valid partition.
pub fn random_partition<R: Rng>(
    roster: &Roster,
    num_groups: usize,
    group_size: usize,
    rng: &mut R,
) -> Result<Partition, ConfigError> {
    check_capacity(roster, num_groups, group_size)?;
    Ok(place_randomly(roster, num_groups, group_size, rng))
}

fn check_capacity(
    roster: &Roster,
    num_groups: usize,
    group_size: usize,
) -> Result<(), ConfigError> {
    let capacity = num_groups * group_size;
    if capacity < roster.len() {
        return Err(ConfigError::InsufficientCapacity {
            capacity,
            required: roster.len(),
        });
    }
    Ok(())
}

/// Shuffles the roster and drops each entity into uniformly random groups
/// until one accepts it. Terminates because total capacity covers the
/// roster and entities are distinct.
fn place_randomly<R: Rng>(
    roster: &Roster,
    num_groups: usize,
    group_size: usize,
    rng: &mut R,
) -> Partition {
    let mut order: Vec<_> = roster.ids().collect();
    order.shuffle(rng);

    let mut partition = Partition::new(num_groups, group_size);
    for id in order {
        loop {
            let group = rng.random_range(0..num_groups);
            if partition.insert_into(group, id) {
                break;
            }
        }
    }
    partition
}
