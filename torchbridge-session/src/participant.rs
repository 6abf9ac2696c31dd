//! Participants: actors bound to display attributes.

use torchbridge_core::{Actor, ActorId};

use crate::error::SetupError;

/// An actor together with the display attributes the session owns: a
/// trimmed, non-empty name and a palette colour.
///
/// The crossing computation never sees these attributes; it works on the
/// underlying [`Actor`] speeds alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    actor: Actor,
    name: String,
    colour: &'static str,
}

impl Participant {
    /// Validates and constructs a [`Participant`].
    ///
    /// Leading and trailing whitespace is trimmed from `name`.
    ///
    /// # Errors
    /// Returns [`SetupError::EmptyName`] when the trimmed name is empty.
    pub(crate) fn new(actor: Actor, name: &str, colour: &'static str) -> Result<Self, SetupError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SetupError::EmptyName);
        }
        Ok(Self {
            actor,
            name: trimmed.to_owned(),
            colour,
        })
    }

    /// The underlying actor.
    pub fn actor(&self) -> Actor {
        self.actor
    }

    /// The participant's session-unique id.
    pub fn id(&self) -> ActorId {
        self.actor.id
    }

    /// Solo crossing speed in minutes.
    pub fn speed(&self) -> u32 {
        self.actor.speed
    }

    /// Trimmed display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned palette colour.
    pub fn colour(&self) -> &'static str {
        self.colour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torchbridge_core::test_support::actor;

    #[test]
    fn names_are_trimmed() {
        let participant =
            Participant::new(actor(1, 3), "  Alice  ", "#FF6B6B").expect("valid name");
        assert_eq!(participant.name(), "Alice");
    }

    #[test]
    fn blank_names_are_rejected() {
        let result = Participant::new(actor(1, 3), "   ", "#FF6B6B");
        assert_eq!(result, Err(SetupError::EmptyName));
    }
}
