//! Assignment domain models.
//!
//! Core data types shared by both search strategies:
//!
//! - [`Entity`] / [`Roster`]: participants with directional preference and
//!   avoidance lists, held in an owned registry and referenced by compact
//!   [`EntityId`]s. Membership questions are id lookups, never structural
//!   comparisons of entity values.
//! - [`Group`]: one fixed-capacity partition cell.
//! - [`Partition`]: a full candidate solution — the unit every optimization
//!   operator works on.

mod entity;
mod group;
mod partition;

pub use entity::{Entity, EntityId, Roster, RosterBuilder};
pub use group::Group;
pub use partition::Partition;
