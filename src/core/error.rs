//! Error type for the duel engine.
//!
//! Only configuration problems surface as errors. Invalid player input
//! (a tap outside the player's turn, a bad card slot) is ignored rather
//! than reported.

use thiserror::Error;

/// Errors raised while configuring or driving a wager.
#[derive(Debug, Error)]
pub enum DuelError {
    /// No physics body is attached, so a throw cannot be launched.
    #[error("no physics body attached")]
    MissingBody,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The reward front table does not cover every panel slot.
    #[error("reward table has {have} entries but the panel has {slots} slots")]
    RewardTableTooShort { have: usize, slots: usize },

    /// The configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}


/// A raw value that is not a die face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("face value {0} outside 1..=6")]
pub struct FaceOutOfRange(pub u8);
