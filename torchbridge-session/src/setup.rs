//! Session assembly.
//!
//! The builder owns the id allocator, assigns palette colours by join
//! order, and validates the group before play begins. The optimal baseline
//! is computed here, exactly once per session.

use log::debug;
use torchbridge_core::{Actor, ActorId, Roster, optimal_crossing_time};

use crate::error::SetupError;
use crate::ids::ActorIdAllocator;
use crate::palette::colour_for;
use crate::participant::Participant;
use crate::session::Session;

/// Collects participants and produces a validated [`Session`].
///
/// # Examples
/// ```
/// use torchbridge_session::SessionBuilder;
///
/// let mut builder = SessionBuilder::new();
/// builder.add_participant("Alice", 1).expect("valid");
/// builder.add_participant("Bob", 2).expect("valid");
/// builder.add_participant("Charlie", 5).expect("valid");
/// builder.add_participant("Dave", 10).expect("valid");
///
/// let session = builder.start().expect("valid group");
/// assert_eq!(session.optimal_minutes(), 17);
/// ```
#[derive(Debug, Default)]
pub struct SessionBuilder {
    ids: ActorIdAllocator,
    participants: Vec<Participant>,
}

impl SessionBuilder {
    /// Construct an empty builder with its own id allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant, returning the allocated id.
    ///
    /// The name is trimmed; the colour comes from the palette in join
    /// order. Group size is checked at [`start`](Self::start), not here.
    ///
    /// # Errors
    /// Returns [`SetupError::EmptyName`] for a blank name and
    /// [`SetupError::Actor`] for a zero speed.
    pub fn add_participant(&mut self, name: &str, speed: u32) -> Result<ActorId, SetupError> {
        let id = self.ids.allocate();
        let actor = Actor::new(id, speed)?;
        let colour = colour_for(self.participants.len());
        let participant = Participant::new(actor, name, colour)?;
        debug!("participant {} joined with speed {speed}", participant.name());
        self.participants.push(participant);
        Ok(id)
    }

    /// Participants added so far, in join order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Validate the group, compute the optimal baseline, and start.
    ///
    /// # Errors
    /// Returns [`SetupError::Roster`] when the group size is out of
    /// bounds. The id allocator makes duplicate ids and the calculator's
    /// input errors unreachable, but both propagate rather than panic.
    pub fn start(self) -> Result<Session, SetupError> {
        let actors: Vec<Actor> = self.participants.iter().map(Participant::actor).collect();
        let roster = Roster::new(actors)?;
        let optimal = optimal_crossing_time(&roster.speeds())?;
        debug!(
            "session started with {} actors, optimal {optimal} min",
            roster.len()
        );
        Ok(Session::from_parts(self.participants, optimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::palette::PARTICIPANT_COLOURS;
    use rstest::rstest;
    use torchbridge_core::{ActorError, RosterError};

    fn classic_builder() -> SessionBuilder {
        let mut builder = SessionBuilder::new();
        for (name, speed) in [("Alice", 1), ("Bob", 2), ("Charlie", 5), ("Dave", 10)] {
            builder.add_participant(name, speed).expect("valid participant");
        }
        builder
    }

    #[rstest]
    fn blank_names_are_rejected() {
        let mut builder = SessionBuilder::new();
        assert_eq!(builder.add_participant("  ", 3), Err(SetupError::EmptyName));
    }

    #[rstest]
    fn zero_speeds_are_rejected() {
        let mut builder = SessionBuilder::new();
        assert_eq!(
            builder.add_participant("Eve", 0),
            Err(SetupError::Actor(ActorError::ZeroSpeed))
        );
    }

    #[rstest]
    fn a_lone_participant_cannot_start() {
        let mut builder = SessionBuilder::new();
        builder.add_participant("Alice", 1).expect("valid participant");
        assert_eq!(
            builder.start().err(),
            Some(SetupError::Roster(RosterError::TooFew { count: 1 }))
        );
    }

    #[rstest]
    fn an_eleventh_participant_cannot_start() {
        let mut builder = SessionBuilder::new();
        for index in 0..11 {
            builder
                .add_participant(&format!("P{index}"), 1)
                .expect("valid participant");
        }
        assert_eq!(
            builder.start().err(),
            Some(SetupError::Roster(RosterError::TooMany { count: 11 }))
        );
    }

    #[rstest]
    fn colours_follow_join_order() {
        let builder = classic_builder();
        let colours: Vec<&str> = builder
            .participants()
            .iter()
            .map(|p| p.colour())
            .collect();
        assert_eq!(colours, PARTICIPANT_COLOURS[..4].to_vec());
    }

    #[rstest]
    fn the_baseline_is_fixed_at_start() {
        let session = classic_builder().start().expect("valid group");
        assert_eq!(session.optimal_minutes(), 17);
        assert_eq!(session.elapsed_minutes(), 0);
    }

    #[rstest]
    fn ids_are_unique_per_builder() {
        let mut builder = SessionBuilder::new();
        let alice = builder.add_participant("Alice", 1).expect("valid participant");
        let bob = builder.add_participant("Bob", 2).expect("valid participant");
        assert_ne!(alice, bob);
    }

    #[rstest]
    fn moves_use_builder_ids() {
        let mut builder = classic_builder();
        let eve = builder.add_participant("Eve", 3).expect("valid participant");
        let mut session = builder.start().expect("valid group");
        let alice = session
            .participants()
            .first()
            .map(Participant::id)
            .expect("session has participants");
        assert_eq!(session.cross(eve, eve).err(), Some(MoveError::IdenticalPair));
        let record = session.cross(alice, eve).expect("pair on the starting side");
        assert_eq!(record.cost(), 3);
    }
}
