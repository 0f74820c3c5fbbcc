//! Entities and the roster registry.
//!
//! A [`Roster`] owns every [`Entity`] for a run and is immutable once
//! built. Entities refer to each other through [`EntityId`]s resolved at
//! build time by [`RosterBuilder`], so two entities that happen to share
//! preference lists are never confused and membership checks are plain id
//! comparisons.

use std::collections::HashMap;

use crate::error::RosterError;

/// Compact handle for one entity in a [`Roster`].
///
/// Ids are indices into the roster that created them; they are meaningless
/// across rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(u32);

impl EntityId {
    /// Index of this entity within its roster.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn new(index: usize) -> Self {
        EntityId(index as u32)
    }
}

/// A participant with directional preference and avoidance lists.
///
/// Preferences need not be mutual: `A` preferring `B` says nothing about
/// `B`'s list. Immutable after roster construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// Display name, unique within the roster.
    pub name: String,
    /// Entities this one wants to share a group with, in stated order.
    pub prefers: Vec<EntityId>,
    /// Entities this one wants kept out of its group. May be empty.
    pub avoids: Vec<EntityId>,
}

/// Owned registry of all entities in a run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    entities: Vec<Entity>,
    index: HashMap<String, EntityId>,
}

impl Roster {
    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the roster holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The entity behind an id.
    ///
    /// # Panics
    /// Panics if `id` did not come from this roster.
    pub fn get(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    /// Looks up an entity by name.
    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.index.get(name).copied()
    }

    /// All ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.entities.len()).map(EntityId::new)
    }

    /// All entities in registration order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// Builds a [`Roster`], resolving names to ids.
///
/// # Examples
///
/// ```
/// use seatplan::model::RosterBuilder;
///
/// let mut builder = RosterBuilder::new();
/// builder.entity("Alice", &["Bob", "Carol"], &[]);
/// builder.entity("Bob", &["Alice"], &["Carol"]);
/// builder.entity("Carol", &["Alice"], &[]);
/// let roster = builder.build().unwrap();
/// assert_eq!(roster.len(), 3);
/// ```
///
/// Entities may reference names registered later; resolution happens in
/// [`build`](Self::build). Duplicate names, references to names never
/// registered, and self-references are rejected.
#[derive(Debug, Default)]
pub struct RosterBuilder {
    raw: Vec<(String, Vec<String>, Vec<String>)>,
}

impl RosterBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity with its preference and avoidance name lists.
    pub fn entity(&mut self, name: impl Into<String>, prefers: &[&str], avoids: &[&str]) -> &mut Self {
        self.raw.push((
            name.into(),
            prefers.iter().map(|s| s.to_string()).collect(),
            avoids.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Resolves all names and produces the immutable roster.
    pub fn build(self) -> Result<Roster, RosterError> {
        if self.raw.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut index = HashMap::with_capacity(self.raw.len());
        for (i, (name, _, _)) in self.raw.iter().enumerate() {
            if index.insert(name.clone(), EntityId::new(i)).is_some() {
                return Err(RosterError::DuplicateName(name.clone()));
            }
        }

        let mut entities = Vec::with_capacity(self.raw.len());
        for (i, (name, prefers, avoids)) in self.raw.iter().enumerate() {
            let own_id = EntityId::new(i);
            let resolve = |names: &[String]| -> Result<Vec<EntityId>, RosterError> {
                names
                    .iter()
                    .map(|n| {
                        let id = index.get(n).copied().ok_or_else(|| {
                            RosterError::UnknownReference {
                                referrer: name.clone(),
                                name: n.clone(),
                            }
                        })?;
                        if id == own_id {
                            return Err(RosterError::SelfReference(name.clone()));
                        }
                        Ok(id)
                    })
                    .collect()
            };
            entities.push(Entity {
                name: name.clone(),
                prefers: resolve(prefers)?,
                avoids: resolve(avoids)?,
            });
        }

        Ok(Roster { entities, index })
    }
}
