//! Shared fixtures for tests and benches.
//!
//! Enabled with the `test-support` feature (and for this crate's own unit
//! tests). Helpers may panic on invalid input; they are not for production
//! use.

use crate::{Actor, ActorId, Roster};

/// Build an actor, panicking on invalid input.
#[must_use]
pub fn actor(id: u64, speed: u32) -> Actor {
    Actor::new(ActorId::new(id), speed).expect("test actor speed must be positive")
}

/// Build a roster from bare speeds, with ids assigned in order from 1.
#[must_use]
pub fn roster_of(speeds: &[u32]) -> Roster {
    let actors = speeds
        .iter()
        .enumerate()
        .map(|(index, &speed)| actor(index as u64 + 1, speed))
        .collect();
    Roster::new(actors).expect("test roster must be a valid group")
}
