//! Validated groups of actors.
//!
//! A [`Roster`] holds the actors for one session. The group size bounds
//! match the setup flow: at least two actors (a lone walker has no puzzle)
//! and at most ten.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Actor, ActorId};

/// Smallest group a session accepts.
pub const MIN_ACTORS: usize = 2;
/// Largest group a session accepts.
pub const MAX_ACTORS: usize = 10;

/// Errors returned by [`Roster::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Fewer than [`MIN_ACTORS`] actors were supplied.
    #[error("a roster needs at least {MIN_ACTORS} actors, got {count}")]
    TooFew {
        /// Number of actors supplied.
        count: usize,
    },
    /// More than [`MAX_ACTORS`] actors were supplied.
    #[error("a roster holds at most {MAX_ACTORS} actors, got {count}")]
    TooMany {
        /// Number of actors supplied.
        count: usize,
    },
    /// Two actors shared the same identifier.
    #[error("duplicate actor id {0}")]
    DuplicateId(ActorId),
}

/// The validated actor group for one session.
///
/// # Examples
/// ```
/// use torchbridge_core::{Actor, ActorId, Roster};
///
/// let actors = vec![
///     Actor::new(ActorId::new(1), 1).expect("positive speed"),
///     Actor::new(ActorId::new(2), 10).expect("positive speed"),
/// ];
/// let roster = Roster::new(actors).expect("valid group");
/// assert_eq!(roster.speeds(), vec![1, 10]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    actors: Vec<Actor>,
}

impl Roster {
    /// Validates and constructs a [`Roster`].
    ///
    /// # Errors
    /// Returns [`RosterError::TooFew`] or [`RosterError::TooMany`] when the
    /// group size is out of bounds, and [`RosterError::DuplicateId`] when two
    /// actors share an identifier.
    pub fn new(actors: Vec<Actor>) -> Result<Self, RosterError> {
        let count = actors.len();
        if count < MIN_ACTORS {
            return Err(RosterError::TooFew { count });
        }
        if count > MAX_ACTORS {
            return Err(RosterError::TooMany { count });
        }
        let mut seen = HashSet::with_capacity(count);
        for actor in &actors {
            if !seen.insert(actor.id) {
                return Err(RosterError::DuplicateId(actor.id));
            }
        }
        Ok(Self { actors })
    }

    /// The actors in join order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Number of actors in the group.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the roster is empty. Always `false` for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Look up an actor by id.
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    /// The speed multiset, sorted ascending.
    ///
    /// Recomputed on each call; the roster itself keeps join order.
    pub fn speeds(&self) -> Vec<u32> {
        let mut speeds: Vec<u32> = self.actors.iter().map(|actor| actor.speed).collect();
        speeds.sort_unstable();
        speeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::actor;
    use rstest::rstest;

    #[rstest]
    fn roster_rejects_a_lone_actor() {
        let result = Roster::new(vec![actor(1, 5)]);
        assert_eq!(result, Err(RosterError::TooFew { count: 1 }));
    }

    #[rstest]
    fn roster_rejects_more_than_ten() {
        let actors = (1..=11).map(|id| actor(id, 1)).collect();
        let result = Roster::new(actors);
        assert_eq!(result, Err(RosterError::TooMany { count: 11 }));
    }

    #[rstest]
    fn roster_rejects_duplicate_ids() {
        let result = Roster::new(vec![actor(1, 5), actor(1, 7)]);
        assert_eq!(result, Err(RosterError::DuplicateId(ActorId::new(1))));
    }

    #[rstest]
    fn speeds_are_sorted_ascending() {
        let roster = Roster::new(vec![actor(1, 10), actor(2, 2), actor(3, 5)])
            .expect("valid group");
        assert_eq!(roster.speeds(), vec![2, 5, 10]);
    }

    #[rstest]
    fn lookup_by_id() {
        let roster = Roster::new(vec![actor(1, 3), actor(2, 8)]).expect("valid group");
        assert_eq!(roster.get(ActorId::new(2)).map(|a| a.speed), Some(8));
        assert!(roster.get(ActorId::new(9)).is_none());
    }
}
