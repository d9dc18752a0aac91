//! The wager: house throws, player throws, higher roll wins.
//!
//! [`WagerSession`] orchestrates the duel. It consumes settle events from
//! the physics side, launches throws, compares rolls (ties go to the house)
//! and hands a winner over to the reward panel. Hosts hear about it through
//! [`WagerObserver`].

pub mod events;
pub mod input;
pub mod phase;
pub mod session;

pub use events::{Cue, PhaseDetail, WagerEvent, WagerObserver};
pub use input::PlayerInput;
pub use phase::{Phase, WagerOutcome, WagerState};
pub use session::{SessionSnapshot, WagerSession};
