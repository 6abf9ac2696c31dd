//! Interactive session engine for the bridge-and-torch puzzle.
//!
//! A session is built by a [`SessionBuilder`]: participants join with a
//! display name and a crossing speed, each receiving a session-unique id
//! and a palette colour. Starting the session validates the group and
//! computes the optimal baseline exactly once; the baseline never changes
//! afterwards.
//!
//! Play alternates between forward crossings of two actors and single-actor
//! torch returns until everyone stands on the far side:
//!
//! ```
//! use torchbridge_session::{CompletionRating, SessionBuilder};
//!
//! let mut builder = SessionBuilder::new();
//! let alice = builder.add_participant("Alice", 1).expect("valid");
//! let bob = builder.add_participant("Bob", 2).expect("valid");
//! let mut session = builder.start().expect("valid group");
//!
//! session.cross(alice, bob).expect("both on the starting side");
//! let summary = session.summary().expect("everyone is across");
//! assert_eq!(summary.elapsed, 2);
//! assert_eq!(summary.rating, CompletionRating::Perfect);
//! ```

#![forbid(unsafe_code)]

mod error;
mod ids;
mod moves;
mod palette;
mod participant;
mod rating;
mod session;
mod setup;

pub use error::{MoveError, SetupError};
pub use ids::ActorIdAllocator;
pub use moves::MoveRecord;
pub use palette::PARTICIPANT_COLOURS;
pub use participant::Participant;
pub use rating::{CompletionRating, CompletionSummary};
pub use session::{Phase, Session, Side};
pub use setup::SessionBuilder;
