//! The reward panel: pick one of N face-down cards.
//!
//! ## Lifecycle
//!
//! ```text
//! Hidden -> SlidingIn -> Open -> Revealing -> Revealed
//!              ^                                  |
//!              +------------- open() -------------+
//! ```
//!
//! Selection is accepted only while `Open`. The first accepted selection
//! locks every other card, so a second click in the same round is a no-op.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::RewardCard;
use super::table::{RewardId, RewardTable};
use crate::core::config::RewardConfig;

/// Panel lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PanelState {
    /// Not on screen.
    Hidden,
    /// Animating in. Cards cannot be picked yet.
    SlidingIn { elapsed: f32 },
    /// Waiting for a pick.
    Open,
    /// A card is flipping. Completes after the reveal duration.
    Revealing { slot: usize, reward: RewardId, elapsed: f32 },
    /// The round is over.
    Revealed { slot: usize, reward: RewardId },
}

/// Timed notifications from [`RewardPanel::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelEvent {
    /// Slide-in finished; cards are now selectable.
    Opened,
    /// The reveal animation finished.
    RevealComplete { slot: usize, reward: RewardId },
}

/// A row of face-down reward cards.
#[derive(Clone, Debug)]
pub struct RewardPanel {
    config: RewardConfig,
    cards: SmallVec<[RewardCard; 8]>,
    state: PanelState,
}

impl RewardPanel {
    /// Create a hidden panel with `config.slots` cards.
    #[must_use]
    pub fn new(config: RewardConfig) -> Self {
        let cards = (0..config.slots).map(RewardCard::face_down).collect();
        Self {
            config,
            cards,
            state: PanelState::Hidden,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// All cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &[RewardCard] {
        &self.cards
    }

    /// A single card.
    #[must_use]
    pub fn card(&self, slot: usize) -> Option<&RewardCard> {
        self.cards.get(slot)
    }

    /// Is selection currently refused?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state != PanelState::Open
    }

    /// The slot revealed this round, if any.
    #[must_use]
    pub fn revealed_slot(&self) -> Option<usize> {
        match self.state {
            PanelState::Revealing { slot, .. } | PanelState::Revealed { slot, .. } => Some(slot),
            _ => None,
        }
    }

    /// Reset every card face-down and start sliding in.
    pub fn open(&mut self) {
        for card in &mut self.cards {
            *card = RewardCard::face_down(card.slot);
        }
        self.state = if self.config.slide_in_duration > 0.0 {
            PanelState::SlidingIn { elapsed: 0.0 }
        } else {
            PanelState::Open
        };
    }

    /// Hide the panel without touching the cards.
    pub fn hide(&mut self) {
        self.state = PanelState::Hidden;
    }

    /// Pick a card.
    ///
    /// Returns the revealed reward, or `None` if the panel is locked, the
    /// slot is out of range, or the slot was already revealed.
    pub fn select(&mut self, slot: usize, table: &RewardTable) -> Option<RewardId> {
        if self.is_locked() {
            tracing::trace!(slot, state = ?self.state, "card pick ignored: panel locked");
            return None;
        }

        let revealed = self.cards.get(slot).map(|c| c.revealed)?;
        if revealed {
            return None;
        }

        let Some(reward) = table.front(slot) else {
            tracing::debug!(slot, "card pick ignored: no reward under slot");
            return None;
        };

        for card in &mut self.cards {
            card.selectable = false;
        }
        self.cards[slot].reveal(reward);
        self.state = PanelState::Revealing {
            slot,
            reward,
            elapsed: 0.0,
        };

        Some(reward)
    }

    /// Advance animations.
    pub fn tick(&mut self, dt: f32) -> Option<PanelEvent> {
        match &mut self.state {
            PanelState::SlidingIn { elapsed } => {
                *elapsed += dt;
                if *elapsed >= self.config.slide_in_duration {
                    self.state = PanelState::Open;
                    return Some(PanelEvent::Opened);
                }
                None
            }
            PanelState::Revealing {
                slot,
                reward,
                elapsed,
            } => {
                *elapsed += dt;
                if *elapsed >= self.config.reveal_duration() {
                    let (slot, reward) = (*slot, *reward);
                    self.state = PanelState::Revealed { slot, reward };
                    return Some(PanelEvent::RevealComplete { slot, reward });
                }
                None
            }
            PanelState::Hidden | PanelState::Open | PanelState::Revealed { .. } => None,
        }
    }
}
