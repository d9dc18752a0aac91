//! Player input, sampled once per tick.

use serde::{Deserialize, Serialize};

/// What the player did this tick.
///
/// Input only has an effect in the phase that expects it; everything else
/// is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerInput {
    /// "Yes" on the wager prompt.
    Accept,
    /// "No" on the wager prompt.
    Decline,
    /// Tap or click to throw.
    Tap,
    /// Click a reward card.
    SelectCard(usize),
}
