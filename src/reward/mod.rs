//! Reward selection for a winning player.
//!
//! A win opens a panel of face-down cards. The player picks one; its front
//! comes from a fixed slot-indexed table ([`RewardTable`]), so the same slot
//! always yields the same reward.

pub mod card;
pub mod panel;
pub mod table;

pub use card::RewardCard;
pub use panel::{PanelEvent, PanelState, RewardPanel};
pub use table::{RewardDefinition, RewardId, RewardTable};
