//! Reward flow integration tests.
//!
//! A winning wager opens the panel; these tests cover selection gating,
//! first-pick-wins, reveal timing, and the panel reset between wagers.

use dice_duel::core::{DuelConfig, FaceValue, RewardConfig};
use dice_duel::physics::ScriptedBody;
use dice_duel::reward::{PanelState, RewardTable};
use dice_duel::wager::{Phase, PhaseDetail, PlayerInput, WagerEvent, WagerSession};

const DT: f32 = 0.25;

fn face(v: u8) -> FaceValue {
    FaceValue::new(v).unwrap()
}

fn config() -> DuelConfig {
    DuelConfig::default()
        .with_settle_duration(0.5)
        .with_reward(RewardConfig {
            slots: 5,
            slide_in_duration: 0.5,
            flip_duration: 0.5,
            hold_duration: 1.0,
        })
}

fn table() -> RewardTable {
    RewardTable::new()
        .with_front("Swift Feet")
        .with_front("Iron Will")
        .with_front("Keen Eye")
        .with_front("Lucky Charm")
        .with_front("Second Wind")
}

/// A session that wins its first wager (house 1, player 6) and then any
/// further scripted wagers.
fn winning_session(extra: &[u8]) -> WagerSession<ScriptedBody> {
    let faces = [1u8, 6].iter().chain(extra).map(|&v| face(v)).collect::<Vec<_>>();
    WagerSession::new(config(), table(), ())
        .unwrap()
        .with_body(ScriptedBody::new().landing_on(faces))
}

fn run_while(session: &mut WagerSession<ScriptedBody>, phase: Phase) {
    for _ in 0..200 {
        if session.phase() != phase {
            return;
        }
        session.tick(DT, None);
    }
    panic!("stuck in {phase}");
}

fn play_to_reward(session: &mut WagerSession<ScriptedBody>) {
    session.tick(DT, Some(PlayerInput::Accept));
    run_while(session, Phase::GameRolling);
    session.tick(DT, Some(PlayerInput::Tap));
    run_while(session, Phase::PlayerRolling);
    assert_eq!(session.phase(), Phase::Reward);
}

/// Wait out the slide-in so cards accept picks.
fn wait_for_panel(session: &mut WagerSession<ScriptedBody>) {
    for _ in 0..20 {
        if session.panel().state() == PanelState::Open {
            return;
        }
        session.tick(DT, None);
    }
    panic!("panel never opened");
}

// =============================================================================
// Entry
// =============================================================================

/// A win presents every card face-down.
#[test]
fn test_reward_entry_resets_cards() {
    let mut session = winning_session(&[]);
    play_to_reward(&mut session);

    let panel = session.panel();
    assert!(matches!(panel.state(), PanelState::SlidingIn { .. }));
    assert_eq!(panel.cards().len(), 5);
    assert!(panel.cards().iter().all(|c| !c.revealed && c.face.is_none() && c.selectable));
}

/// Picks during the slide-in are refused.
#[test]
fn test_select_during_slide_in_ignored() {
    let mut session = winning_session(&[]);
    play_to_reward(&mut session);

    assert_eq!(session.select_card(0), None);
    assert!(session.panel().cards().iter().all(|c| !c.revealed));
}

// =============================================================================
// Selection
// =============================================================================

/// The picked slot reveals its fixed front.
#[test]
fn test_select_reveals_slot_front() {
    let mut session = winning_session(&[]);
    play_to_reward(&mut session);
    wait_for_panel(&mut session);

    let reward = session.select_card(2).unwrap();

    assert_eq!(Some(reward), session.rewards().front(2));
    assert_eq!(session.rewards().name(reward), Some("Keen Eye"));
    let card = session.panel().card(2).unwrap();
    assert!(card.revealed);
    assert_eq!(card.face, Some(reward));
}

/// Only the first pick in a Reward phase counts.
#[test]
fn test_second_select_is_noop() {
    let mut session = winning_session(&[]);
    play_to_reward(&mut session);
    wait_for_panel(&mut session);

    session.tick(DT, Some(PlayerInput::SelectCard(1)));
    let first = session.panel().card(1).unwrap().face;
    session.tick(DT, Some(PlayerInput::SelectCard(3)));
    session.tick(DT, Some(PlayerInput::SelectCard(1)));

    assert!(first.is_some());
    assert_eq!(session.panel().card(1).unwrap().face, first);
    assert!(!session.panel().card(3).unwrap().revealed);
    assert_eq!(session.panel().cards().iter().filter(|c| c.revealed).count(), 1);
}

/// Out-of-range slots are ignored and leave the panel open.
#[test]
fn test_out_of_range_slot_ignored() {
    let mut session = winning_session(&[]);
    play_to_reward(&mut session);
    wait_for_panel(&mut session);

    session.tick(DT, Some(PlayerInput::SelectCard(99)));

    assert_eq!(session.panel().state(), PanelState::Open);
    assert_eq!(session.phase(), Phase::Reward);
}

/// Card picks outside the Reward phase are ignored.
#[test]
fn test_select_outside_reward_ignored() {
    let mut session = winning_session(&[]);

    assert_eq!(session.select_card(0), None);
    session.tick(DT, Some(PlayerInput::Accept));
    assert_eq!(session.select_card(0), None);
    assert!(session.panel().cards().iter().all(|c| !c.revealed));
}

// =============================================================================
// Completion
// =============================================================================

/// The wager ends once the reveal animation has run its course.
#[test]
fn test_reveal_completes_to_idle() {
    let mut session = winning_session(&[]);
    play_to_reward(&mut session);
    wait_for_panel(&mut session);

    let reward = session.select_card(4).unwrap();

    // flip 0.5 + hold 1.0 = six ticks of 0.25
    for _ in 0..5 {
        session.tick(DT, None);
        assert_eq!(session.phase(), Phase::Reward);
    }
    session.tick(DT, None);

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(
        session.history().back(),
        Some(&WagerEvent::PhaseChanged {
            phase: Phase::Idle,
            detail: PhaseDetail::RewardRevealed { slot: 4, reward },
        })
    );
    assert!(session.last_outcome().unwrap().player_won);

    // The reveal persists until the next Reward phase.
    assert_eq!(session.panel().card(4).unwrap().face, Some(reward));
}

/// The next winning wager starts with a clean panel.
#[test]
fn test_next_reward_phase_resets_panel() {
    let mut session = winning_session(&[2, 3]);
    play_to_reward(&mut session);
    wait_for_panel(&mut session);
    session.select_card(0);
    run_while(&mut session, Phase::Reward);

    session.restart();
    assert!(session.panel().card(0).unwrap().revealed);

    play_to_reward(&mut session);
    assert!(session.panel().cards().iter().all(|c| !c.revealed && c.face.is_none()));
}
