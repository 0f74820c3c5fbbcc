//! A full candidate solution.

use super::entity::EntityId;
use super::group::Group;
use crate::model::Roster;

/// An ordered sequence of [`Group`]s assigning entities to cells.
///
/// A partition is *complete* for a roster when every entity appears in
/// exactly one group. Operators mutate partitions in place (mutation, hill
/// climbing) or replace them wholesale (crossover); `Clone` produces the
/// deep snapshot that best-ever tracking relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    groups: Vec<Group>,
}

impl Partition {
    /// Creates `num_groups` empty groups of `group_size` capacity each.
    pub fn new(num_groups: usize, group_size: usize) -> Self {
        Self {
            groups: (0..num_groups).map(|_| Group::new(group_size)).collect(),
        }
    }

    /// Creates empty groups with the same capacities as `self`'s.
    pub fn empty_like(&self) -> Self {
        Self {
            groups: self.groups.iter().map(|g| Group::new(g.capacity())).collect(),
        }
    }

    /// The groups, in partition order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Sum of all group capacities.
    pub fn total_capacity(&self) -> usize {
        self.groups.iter().map(Group::capacity).sum()
    }

    /// Number of entities currently seated.
    pub fn seated_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Every seated entity, flattened in group order.
    pub fn members_pool(&self) -> Vec<EntityId> {
        self.groups
            .iter()
            .flat_map(|g| g.members().iter().copied())
            .collect()
    }

    /// Index of the group containing `id`, if seated.
    pub fn group_of(&self, id: EntityId) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(id))
    }

    /// Adds `id` to group `group_idx`. Same no-op semantics as
    /// [`Group::insert`].
    pub fn insert_into(&mut self, group_idx: usize, id: EntityId) -> bool {
        self.groups[group_idx].insert(id)
    }

    /// Exchanges the member at `(group_a, pos_a)` with the one at
    /// `(group_b, pos_b)`. Group sizes are unchanged.
    ///
    /// # Panics
    /// Panics if the groups coincide or either position is out of range.
    pub fn swap_between(
        &mut self,
        group_a: usize,
        pos_a: usize,
        group_b: usize,
        pos_b: usize,
    ) {
        assert_ne!(group_a, group_b, "swap requires two distinct groups");
        let a = self.groups[group_a].members()[pos_a];
        let b = self.groups[group_b].members()[pos_b];
        self.groups[group_a].replace(pos_a, b);
        self.groups[group_b].replace(pos_b, a);
    }

    /// Checks structural invariants against a roster.
    ///
    /// Verifies that no group exceeds its capacity, that no entity appears
    /// in more than one group, and — when `complete` — that every roster
    /// entity is seated. Violations are operator bugs, so this panics
    /// rather than returning an error.
    pub fn assert_valid(&self, roster: &Roster, complete: bool) {
        let mut seen = vec![false; roster.len()];
        for (gi, group) in self.groups.iter().enumerate() {
            assert!(
                group.len() <= group.capacity(),
                "group {gi} exceeds capacity: {} > {}",
                group.len(),
                group.capacity()
            );
            for &id in group.members() {
                assert!(
                    !std::mem::replace(&mut seen[id.index()], true),
                    "entity {:?} seated more than once",
                    roster.get(id).name
                );
            }
        }
        if complete {
            let seated = seen.iter().filter(|&&s| s).count();
            assert_eq!(
                seated,
                roster.len(),
                "partition seats {seated} of {} entities",
                roster.len()
            );
        }
    }
}
