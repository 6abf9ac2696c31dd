//! The turn state machine.
//!
//! Play alternates between two-actor forward crossings and one-actor torch
//! returns. Every transition is validated before any state changes, so a
//! rejected move leaves the session untouched.

use log::{debug, info};
use torchbridge_core::ActorId;

use crate::error::MoveError;
use crate::moves::MoveRecord;
use crate::participant::Participant;
use crate::rating::{CompletionRating, CompletionSummary};

/// The two banks of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The starting side, where everyone begins.
    Near,
    /// The far side, where everyone must end up.
    Far,
}

/// What the session expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Two actors on the starting side must cross forward.
    AwaitingPair,
    /// One actor on the far side must return the torch.
    AwaitingReturn,
    /// Everyone is across; only the summary remains.
    Complete,
}

/// A running bridge-and-torch session.
///
/// Built by [`SessionBuilder`](crate::SessionBuilder). The optimal baseline
/// is computed once at start and never changes; the player's elapsed total
/// accumulates as moves are applied.
#[derive(Debug, Clone)]
pub struct Session {
    participants: Vec<Participant>,
    near: Vec<ActorId>,
    far: Vec<ActorId>,
    torch: Side,
    phase: Phase,
    elapsed: u64,
    optimal: u64,
    log: Vec<MoveRecord>,
}

impl Session {
    pub(crate) fn from_parts(participants: Vec<Participant>, optimal: u64) -> Self {
        let near = participants.iter().map(Participant::id).collect();
        Self {
            participants,
            near,
            far: Vec::new(),
            torch: Side::Near,
            phase: Phase::AwaitingPair,
            elapsed: 0,
            optimal,
            log: Vec::new(),
        }
    }

    /// What the session expects next.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Which bank currently holds the torch.
    pub const fn torch_side(&self) -> Side {
        self.torch
    }

    /// Minutes the player has spent so far.
    pub const fn elapsed_minutes(&self) -> u64 {
        self.elapsed
    }

    /// The optimal total computed at session start.
    pub const fn optimal_minutes(&self) -> u64 {
        self.optimal
    }

    /// All participants in join order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Look up a participant by id.
    pub fn participant(&self, id: ActorId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    /// Ids currently on the starting side, in arrival order.
    pub fn near_side(&self) -> &[ActorId] {
        &self.near
    }

    /// Ids currently on the far side, in arrival order.
    pub fn far_side(&self) -> &[ActorId] {
        &self.far
    }

    /// The applied moves, oldest first.
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.log
    }

    /// Whether everyone is across.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The completion figures, once everyone is across.
    pub fn summary(&self) -> Option<CompletionSummary> {
        if self.phase != Phase::Complete {
            return None;
        }
        Some(CompletionSummary {
            elapsed: self.elapsed,
            optimal: self.optimal,
            rating: CompletionRating::for_times(self.elapsed, self.optimal),
        })
    }

    /// Send two actors across the bridge with the torch.
    ///
    /// Charges the slower member's speed. When the starting side empties
    /// the session completes; otherwise it waits for a torch return.
    ///
    /// # Errors
    /// Returns a [`MoveError`] and leaves the session unchanged when the
    /// session is not awaiting a pair, the ids are not two distinct known
    /// actors, or either actor is not on the starting side.
    pub fn cross(&mut self, first: ActorId, second: ActorId) -> Result<MoveRecord, MoveError> {
        match self.phase {
            Phase::AwaitingPair => {}
            Phase::AwaitingReturn => return Err(MoveError::ReturnRequired),
            Phase::Complete => return Err(MoveError::PuzzleComplete),
        }
        if first == second {
            return Err(MoveError::IdenticalPair);
        }
        let (first_name, first_speed) = self.display_attributes(first)?;
        let (second_name, second_speed) = self.display_attributes(second)?;
        for id in [first, second] {
            if !self.near.contains(&id) {
                return Err(MoveError::NotOnStartingSide(id));
            }
        }

        let cost = u64::from(first_speed.max(second_speed));
        self.near.retain(|id| *id != first && *id != second);
        self.far.push(first);
        self.far.push(second);
        self.torch = Side::Far;
        self.elapsed += cost;

        debug!(
            "{first_name} and {second_name} crossed in {cost} min (elapsed {})",
            self.elapsed
        );
        let record = MoveRecord::Cross {
            names: [first_name, second_name],
            cost,
        };
        self.log.push(record.clone());

        if self.near.is_empty() {
            self.phase = Phase::Complete;
            info!(
                "everyone is across in {} min (optimal {})",
                self.elapsed, self.optimal
            );
        } else {
            self.phase = Phase::AwaitingReturn;
        }
        Ok(record)
    }

    /// Send one actor back with the torch.
    ///
    /// Charges that actor's own speed and hands the turn back to the
    /// starting side.
    ///
    /// # Errors
    /// Returns a [`MoveError`] and leaves the session unchanged when the
    /// session is not awaiting a return, the id is unknown, or the actor is
    /// not on the far side.
    pub fn send_back(&mut self, actor: ActorId) -> Result<MoveRecord, MoveError> {
        match self.phase {
            Phase::AwaitingReturn => {}
            Phase::AwaitingPair => return Err(MoveError::CrossingRequired),
            Phase::Complete => return Err(MoveError::PuzzleComplete),
        }
        let (name, speed) = self.display_attributes(actor)?;
        if !self.far.contains(&actor) {
            return Err(MoveError::NotOnFarSide(actor));
        }

        let cost = u64::from(speed);
        self.far.retain(|id| *id != actor);
        self.near.push(actor);
        self.torch = Side::Near;
        self.elapsed += cost;
        self.phase = Phase::AwaitingPair;

        debug!("{name} returned the torch in {cost} min (elapsed {})", self.elapsed);
        let record = MoveRecord::Return { name, cost };
        self.log.push(record.clone());
        Ok(record)
    }

    fn display_attributes(&self, id: ActorId) -> Result<(String, u32), MoveError> {
        self.participant(id)
            .map(|p| (p.name().to_owned(), p.speed()))
            .ok_or(MoveError::UnknownActor(id))
    }
}
