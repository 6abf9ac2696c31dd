//! Error types emitted by the session engine.

use thiserror::Error;
use torchbridge_core::{ActorError, ActorId, OptimalTimeError, RosterError};

/// Errors returned while assembling a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A participant's display name was empty or whitespace.
    #[error("participant name must not be empty")]
    EmptyName,
    /// A participant's crossing speed failed validation.
    #[error(transparent)]
    Actor(#[from] ActorError),
    /// The assembled group failed validation.
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// The optimal baseline could not be computed.
    ///
    /// Unreachable for a validated roster, but propagated rather than
    /// unwrapped.
    #[error(transparent)]
    OptimalTime(#[from] OptimalTimeError),
}

/// Errors returned when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move referenced an actor id the session does not know.
    #[error("unknown actor id {0}")]
    UnknownActor(ActorId),
    /// A forward crossing selected the same actor twice.
    #[error("a forward crossing needs two distinct actors")]
    IdenticalPair,
    /// The selected actor is not on the starting side.
    #[error("actor {0} is not on the starting side")]
    NotOnStartingSide(ActorId),
    /// The selected actor is not on the far side.
    #[error("actor {0} is not on the far side")]
    NotOnFarSide(ActorId),
    /// A forward crossing was attempted while the torch is on the far side.
    #[error("the torch is on the far side; one actor must return it first")]
    ReturnRequired,
    /// A torch return was attempted while the torch is on the starting side.
    #[error("the torch is on the starting side; a pair must cross first")]
    CrossingRequired,
    /// A move was attempted after everyone had crossed.
    #[error("the puzzle is already solved")]
    PuzzleComplete,
}
