//! Events the session reports to its host.
//!
//! The host (UI, audio, scene flow) implements [`WagerObserver`]. Every
//! notification is also appended to the session's history as a
//! [`WagerEvent`].

use serde::{Deserialize, Serialize};

use super::phase::{Phase, WagerOutcome};
use crate::core::face::FaceValue;
use crate::reward::RewardId;

/// What accompanied a phase change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseDetail {
    /// Wager prompt shown.
    Prompt,
    /// The player declined.
    Declined,
    /// The player accepted and the house is throwing.
    HouseThrowing,
    /// House throw settled.
    HouseRolled(FaceValue),
    /// Player throw settled.
    PlayerRolled(FaceValue),
    /// Rolls compared.
    Compared(WagerOutcome),
    /// Reveal animation finished.
    RewardRevealed { slot: usize, reward: RewardId },
}

impl PhaseDetail {
    /// Status text for the host's status label, if this detail has one.
    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        match *self {
            PhaseDetail::Prompt | PhaseDetail::PlayerRolled(_) => None,
            PhaseDetail::Declined => Some("You chose not to gamble.".to_string()),
            PhaseDetail::HouseThrowing => Some("The game rolls first...".to_string()),
            PhaseDetail::HouseRolled(v) => Some(format!("Game rolled: {v}. Now it's your turn!")),
            PhaseDetail::Compared(outcome) if outcome.player_won => Some(format!(
                "You rolled {} vs {}. You win! Choose a card!",
                outcome.player, outcome.house
            )),
            PhaseDetail::Compared(outcome) => Some(format!(
                "You rolled {} vs {}. No Buff Acquired!",
                outcome.player, outcome.house
            )),
            PhaseDetail::RewardRevealed { .. } => Some("You received a buff card!".to_string()),
        }
    }
}

/// Presentation cues for audio and the face readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Play the intro voice line.
    IntroVoiceLine,
    /// Play the throw click.
    RollClick,
    /// Show the settled value.
    ShowFace(FaceValue),
    /// Hide the value readout (the die is moving).
    HideFace,
}

/// One entry in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WagerEvent {
    PhaseChanged { phase: Phase, detail: PhaseDetail },
    WagerResult { player_won: bool },
    Cue(Cue),
}

/// Host-side hooks. Every method defaults to doing nothing.
pub trait WagerObserver {
    /// The session entered `phase`.
    fn on_phase_changed(&mut self, _phase: Phase, _detail: &PhaseDetail) {}

    /// The rolls were compared.
    fn on_wager_result(&mut self, _player_won: bool) {}

    /// A presentation cue fired.
    fn on_cue(&mut self, _cue: Cue) {}
}

/// Ignores everything.
impl WagerObserver for () {}

impl<O: WagerObserver + ?Sized> WagerObserver for &mut O {
    fn on_phase_changed(&mut self, phase: Phase, detail: &PhaseDetail) {
        (**self).on_phase_changed(phase, detail);
    }

    fn on_wager_result(&mut self, player_won: bool) {
        (**self).on_wager_result(player_won);
    }

    fn on_cue(&mut self, cue: Cue) {
        (**self).on_cue(cue);
    }
}

impl WagerEvent {
    /// Forward this event to an observer.
    pub fn dispatch<O: WagerObserver + ?Sized>(&self, observer: &mut O) {
        match self {
            WagerEvent::PhaseChanged { phase, detail } => observer.on_phase_changed(*phase, detail),
            WagerEvent::WagerResult { player_won } => observer.on_wager_result(*player_won),
            WagerEvent::Cue(cue) => observer.on_cue(*cue),
        }
    }
}
