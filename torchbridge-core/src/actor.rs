//! Actors who must cross the bridge.
//!
//! An [`Actor`] carries only what the crossing computation needs: a
//! session-unique identifier and a walking speed in whole minutes. Display
//! concerns such as names and colours belong to the surrounding session.

use std::fmt;

use thiserror::Error;

/// Session-unique identifier for an actor.
///
/// # Examples
/// ```
/// use torchbridge_core::ActorId;
///
/// let id = ActorId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(u64);

impl ActorId {
    /// Wrap a raw identifier value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors returned by [`Actor::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    /// The supplied crossing speed was zero.
    #[error("actor speed must be a positive number of minutes")]
    ZeroSpeed,
}

/// A participant in the crossing puzzle.
///
/// `speed` is the time in minutes the actor takes to cross the bridge
/// alone; a pair crossing together moves at the slower member's pace.
///
/// # Examples
/// ```
/// use torchbridge_core::{Actor, ActorId};
///
/// let actor = Actor::new(ActorId::new(1), 5).expect("positive speed");
/// assert_eq!(actor.speed, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    /// Session-unique identifier.
    pub id: ActorId,
    /// Solo crossing time in minutes. Always positive.
    pub speed: u32,
}

impl Actor {
    /// Validates and constructs an [`Actor`].
    ///
    /// # Errors
    /// Returns [`ActorError::ZeroSpeed`] when `speed` is zero.
    ///
    /// # Examples
    /// ```
    /// use torchbridge_core::{Actor, ActorError, ActorId};
    ///
    /// assert!(Actor::new(ActorId::new(1), 2).is_ok());
    /// assert_eq!(Actor::new(ActorId::new(2), 0), Err(ActorError::ZeroSpeed));
    /// ```
    pub const fn new(id: ActorId, speed: u32) -> Result<Self, ActorError> {
        if speed == 0 {
            return Err(ActorError::ZeroSpeed);
        }
        Ok(Self { id, speed })
    }
}
