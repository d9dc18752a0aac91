//! Wager phases.
//!
//! [`Phase`] is the public, data-free label. [`WagerState`] is the tagged
//! variant the session actually holds: each variant carries exactly the rolls
//! that exist at that point, so a comparison without both rolls cannot be
//! constructed.

use serde::{Deserialize, Serialize};

use crate::core::face::FaceValue;

/// Which step of the wager is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Intro,
    Idle,
    GameRolling,
    PlayerRolling,
    Compare,
    Reward,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Intro => "Intro",
            Phase::Idle => "Idle",
            Phase::GameRolling => "GameRolling",
            Phase::PlayerRolling => "PlayerRolling",
            Phase::Compare => "Compare",
            Phase::Reward => "Reward",
        };
        f.write_str(name)
    }
}

/// Result of a completed comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerOutcome {
    pub house: FaceValue,
    pub player: FaceValue,
    pub player_won: bool,
}

impl WagerOutcome {
    /// Compare two rolls. Ties go to the house.
    #[must_use]
    pub fn decide(house: FaceValue, player: FaceValue) -> Self {
        Self {
            house,
            player,
            player_won: player.beats(house),
        }
    }
}

/// Phase plus the data valid in it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum WagerState {
    /// Waiting for accept/decline.
    Intro,

    /// Nothing more happens in this wager.
    Idle { outcome: Option<WagerOutcome> },

    /// The house throw. `in_flight` is false only if the launch failed.
    GameRolling { in_flight: bool },

    /// Waiting for, or watching, the player's throw.
    PlayerRolling { house: FaceValue, in_flight: bool },

    /// Both rolls known; resolved within the same tick.
    Compare { house: FaceValue, player: FaceValue },

    /// The player won and is picking a card.
    Reward { house: FaceValue, player: FaceValue },
}

impl WagerState {
    /// Initial state.
    #[must_use]
    pub const fn intro() -> Self {
        WagerState::Intro
    }

    /// Data-free label.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            WagerState::Intro => Phase::Intro,
            WagerState::Idle { .. } => Phase::Idle,
            WagerState::GameRolling { .. } => Phase::GameRolling,
            WagerState::PlayerRolling { .. } => Phase::PlayerRolling,
            WagerState::Compare { .. } => Phase::Compare,
            WagerState::Reward { .. } => Phase::Reward,
        }
    }

    /// House roll, present from PlayerRolling through Reward.
    #[must_use]
    pub fn house_roll(&self) -> Option<FaceValue> {
        match *self {
            WagerState::PlayerRolling { house, .. }
            | WagerState::Compare { house, .. }
            | WagerState::Reward { house, .. } => Some(house),
            WagerState::Intro | WagerState::Idle { .. } | WagerState::GameRolling { .. } => None,
        }
    }

    /// Player roll, present in Compare and Reward.
    #[must_use]
    pub fn player_roll(&self) -> Option<FaceValue> {
        match *self {
            WagerState::Compare { player, .. } | WagerState::Reward { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Is a launched throw waiting to settle?
    #[must_use]
    pub fn throw_in_flight(&self) -> bool {
        matches!(
            self,
            WagerState::GameRolling { in_flight: true } | WagerState::PlayerRolling { in_flight: true, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(v: u8) -> FaceValue {
        FaceValue::new(v).unwrap()
    }

    #[test]
    fn test_decide() {
        assert!(WagerOutcome::decide(face(3), face(5)).player_won);
        assert!(!WagerOutcome::decide(face(5), face(5)).player_won);
        assert!(!WagerOutcome::decide(face(6), face(6)).player_won);
        assert!(!WagerOutcome::decide(face(4), face(1)).player_won);
    }

    #[test]
    fn test_roll_visibility_by_phase() {
        let states = [
            (WagerState::intro(), None, None),
            (WagerState::Idle { outcome: None }, None, None),
            (WagerState::GameRolling { in_flight: true }, None, None),
            (
                WagerState::PlayerRolling { house: face(3), in_flight: false },
                Some(face(3)),
                None,
            ),
            (
                WagerState::Compare { house: face(3), player: face(4) },
                Some(face(3)),
                Some(face(4)),
            ),
            (
                WagerState::Reward { house: face(3), player: face(4) },
                Some(face(3)),
                Some(face(4)),
            ),
        ];

        for (state, house, player) in states {
            assert_eq!(state.house_roll(), house, "{}", state.phase());
            assert_eq!(state.player_roll(), player, "{}", state.phase());
        }
    }

    #[test]
    fn test_throw_in_flight() {
        assert!(WagerState::GameRolling { in_flight: true }.throw_in_flight());
        assert!(!WagerState::GameRolling { in_flight: false }.throw_in_flight());
        assert!(!WagerState::intro().throw_in_flight());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::PlayerRolling.to_string(), "PlayerRolling");
    }
}
