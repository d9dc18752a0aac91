//! A single face-down reward card.

use serde::{Deserialize, Serialize};

use super::table::RewardId;

/// One slot of the reward panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardCard {
    /// Position in the panel.
    pub slot: usize,

    /// Has this card been flipped?
    pub revealed: bool,

    /// Reward shown on the front. Assigned only when revealed.
    pub face: Option<RewardId>,

    /// Does the card accept clicks?
    pub selectable: bool,
}

impl RewardCard {
    /// A face-down, selectable card.
    #[must_use]
    pub fn face_down(slot: usize) -> Self {
        Self {
            slot,
            revealed: false,
            face: None,
            selectable: true,
        }
    }

    /// Flip the card. Has no effect on an already revealed card.
    pub fn reveal(&mut self, reward: RewardId) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        self.face = Some(reward);
    }
}
