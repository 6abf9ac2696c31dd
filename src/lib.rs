//! Facade crate for the Torchbridge crossing engine.
//!
//! This crate re-exports the core domain types and exposes the interactive
//! session engine behind a feature flag.

#![forbid(unsafe_code)]

pub use torchbridge_core::{
    Actor, ActorError, ActorId, MAX_ACTORS, MIN_ACTORS, OptimalTimeError, Roster, RosterError,
    optimal_crossing_time,
};

#[cfg(feature = "session")]
pub use torchbridge_session::{
    ActorIdAllocator, CompletionRating, CompletionSummary, MoveError, MoveRecord,
    PARTICIPANT_COLOURS, Participant, Phase, Session, SessionBuilder, SetupError, Side,
};
