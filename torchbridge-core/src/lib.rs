//! Core domain types for the Torchbridge engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early.
//! The [`optimal_crossing_time`] routine is the engine's algorithmic core:
//! the minimum achievable total for a bridge-and-torch crossing puzzle.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod actor;
mod optimal;
mod roster;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use actor::{Actor, ActorError, ActorId};
pub use optimal::{OptimalTimeError, optimal_crossing_time};
pub use roster::{MAX_ACTORS, MIN_ACTORS, Roster, RosterError};
