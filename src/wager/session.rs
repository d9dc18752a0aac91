//! The wager session state machine.
//!
//! ## Flow
//!
//! ```text
//! Intro --Accept--> GameRolling --settle--> PlayerRolling --Tap, settle--> Compare
//!   |                                                                      |    |
//!   +--Decline--> Idle <--------------------- loss or tie -----------------+    |
//!                  ^                                                            |
//!                  +------- reveal complete <------- Reward <------- win -------+
//! ```
//!
//! ## Tick order
//!
//! 1. Advance the clock.
//! 2. Sample the body; a settle event is consumed immediately.
//! 3. Apply this tick's player input.
//! 4. Advance timers (intro cue, reward panel).
//!
//! The intro voice line is timed from the start of the wager, not from the
//! Intro phase: it plays once `intro_voice_delay` seconds in even if the
//! player has already answered.
//!
//! Because step 2 runs before step 3, a throw launched by input can never be
//! confused with the previous throw's settle event.
//!
//! All phase changes go through [`WagerSession::step`], one match over
//! `(state, trigger)`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::events::{Cue, PhaseDetail, WagerEvent, WagerObserver};
use super::input::PlayerInput;
use super::phase::{Phase, WagerOutcome, WagerState};
use crate::core::config::DuelConfig;
use crate::core::error::DuelError;
use crate::core::face::FaceValue;
use crate::core::rng::{GameRng, GameRngState};
use crate::physics::{PhysicsBody, RollLauncher, SettleDetector};
use crate::reward::{PanelEvent, PanelState, RewardCard, RewardId, RewardPanel, RewardTable};

/// Things that can move the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trigger {
    Accept,
    Decline,
    Tap,
    Settled(FaceValue),
    Evaluate,
    RevealComplete { slot: usize, reward: RewardId },
}

/// Point-in-time view of a session, for debugging and host save slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: WagerState,
    pub time: f64,
    pub has_pending_result: bool,
    pub last_motion_time: f64,
    pub last_outcome: Option<WagerOutcome>,
    pub panel: PanelState,
    pub cards: Vec<RewardCard>,
    pub rng: GameRngState,
}

/// One house-versus-player dice duel.
///
/// `B` is the host's die body. `O` receives notifications; the default `()`
/// ignores them (the history still records everything).
///
/// ```
/// use dice_duel::core::{DuelConfig, FaceValue};
/// use dice_duel::physics::ScriptedBody;
/// use dice_duel::reward::RewardTable;
/// use dice_duel::wager::{Phase, PlayerInput, WagerSession};
///
/// let face = |v| FaceValue::new(v).unwrap();
/// let body = ScriptedBody::new().landing_on([face(2), face(5)]);
/// let mut session: WagerSession<ScriptedBody> =
///     WagerSession::new(DuelConfig::default(), RewardTable::numbered_buffs(5), ()).unwrap();
/// session.attach_body(body);
///
/// session.tick(0.1, Some(PlayerInput::Accept));
/// while session.phase() == Phase::GameRolling {
///     session.tick(0.1, None);
/// }
/// assert_eq!(session.house_roll(), Some(face(2)));
///
/// session.tick(0.1, Some(PlayerInput::Tap));
/// while session.phase() == Phase::PlayerRolling {
///     session.tick(0.1, None);
/// }
/// assert_eq!(session.phase(), Phase::Reward);
/// ```
pub struct WagerSession<B, O = ()> {
    config: DuelConfig,
    rewards: RewardTable,
    state: WagerState,
    detector: SettleDetector,
    launcher: RollLauncher,
    panel: RewardPanel,
    rng: GameRng,
    body: Option<B>,
    observer: O,
    now: f64,
    /// Seconds into the wager, until the intro voice line has played.
    voice_line_in: Option<f32>,
    last_outcome: Option<WagerOutcome>,
    history: Vector<WagerEvent>,
}

impl<B: PhysicsBody, O: WagerObserver> WagerSession<B, O> {
    /// Create a session in the Intro phase, with no body attached.
    pub fn new(config: DuelConfig, rewards: RewardTable, observer: O) -> Result<Self, DuelError> {
        config.validate()?;
        if rewards.len() < config.reward.slots {
            return Err(DuelError::RewardTableTooShort {
                have: rewards.len(),
                slots: config.reward.slots,
            });
        }

        let mut session = Self {
            detector: SettleDetector::new(config.settle.clone()),
            launcher: RollLauncher::new(config.launch.clone()),
            panel: RewardPanel::new(config.reward.clone()),
            rng: GameRng::new(config.seed).for_context("launch"),
            config,
            rewards,
            state: WagerState::intro(),
            body: None,
            observer,
            now: 0.0,
            voice_line_in: Some(0.0),
            last_outcome: None,
            history: Vector::new(),
        };
        session.announce_intro();
        Ok(session)
    }

    /// Attach a body, builder style.
    #[must_use]
    pub fn with_body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach (or replace) the die body.
    pub fn attach_body(&mut self, body: B) -> Option<B> {
        self.body.replace(body)
    }

    /// Remove the die body. Throws will fail until one is attached.
    pub fn detach_body(&mut self) -> Option<B> {
        self.body.take()
    }

    // === Accessors ===

    #[must_use]
    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut B> {
        self.body.as_mut()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    #[must_use]
    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    /// Current phase label.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Current state with its data.
    #[must_use]
    pub fn state(&self) -> WagerState {
        self.state
    }

    #[must_use]
    pub fn house_roll(&self) -> Option<FaceValue> {
        self.state.house_roll()
    }

    #[must_use]
    pub fn player_roll(&self) -> Option<FaceValue> {
        self.state.player_roll()
    }

    /// Has the die settled since it last moved?
    #[must_use]
    pub fn has_pending_result(&self) -> bool {
        self.detector.has_result()
    }

    #[must_use]
    pub fn last_motion_time(&self) -> f64 {
        self.detector.last_motion_time()
    }

    /// Outcome of the most recent comparison in this wager.
    #[must_use]
    pub fn last_outcome(&self) -> Option<WagerOutcome> {
        self.last_outcome
    }

    /// Session clock in seconds.
    ///
    /// Kept in `f64` so long-running hosts still resolve a single frame.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }

    #[must_use]
    pub fn panel(&self) -> &RewardPanel {
        &self.panel
    }

    /// Everything reported since the wager started. O(1) to clone.
    #[must_use]
    pub fn history(&self) -> Vector<WagerEvent> {
        self.history.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            time: self.now,
            has_pending_result: self.detector.has_result(),
            last_motion_time: self.detector.last_motion_time(),
            last_outcome: self.last_outcome,
            panel: self.panel.state(),
            cards: self.panel.cards().to_vec(),
            rng: self.rng.state(),
        }
    }

    // === Driving ===

    /// Start a fresh wager. Rolls, motion clock and history are discarded.
    ///
    /// The reward panel keeps its last reveal until the next Reward phase.
    pub fn restart(&mut self) {
        self.state = WagerState::intro();
        self.voice_line_in = Some(0.0);
        self.detector = SettleDetector::new(self.config.settle.clone());
        self.panel.hide();
        self.last_outcome = None;
        self.history = Vector::new();
        self.announce_intro();
    }

    /// Advance one simulation step.
    pub fn tick(&mut self, dt: f32, input: Option<PlayerInput>) {
        self.now += f64::from(dt);
        self.sample_body();

        if let Some(input) = input {
            self.apply_input(input);
        }

        self.advance_timers(dt);
    }

    /// Pick a reward card. Only meaningful in the Reward phase.
    pub fn select_card(&mut self, slot: usize) -> Option<RewardId> {
        if self.phase() != Phase::Reward {
            tracing::trace!(slot, phase = %self.phase(), "card pick ignored outside reward phase");
            return None;
        }

        let reward = self.panel.select(slot, &self.rewards)?;
        tracing::debug!(slot, %reward, "reward card picked");
        Some(reward)
    }

    fn apply_input(&mut self, input: PlayerInput) {
        match input {
            PlayerInput::Accept => self.step(Trigger::Accept),
            PlayerInput::Decline => self.step(Trigger::Decline),
            PlayerInput::Tap => self.step(Trigger::Tap),
            PlayerInput::SelectCard(slot) => {
                let _ = self.select_card(slot);
            }
        }
    }

    fn sample_body(&mut self) {
        let Some(body) = self.body.as_ref() else {
            return;
        };

        let sample = body.sample_motion();
        let was_showing = self.detector.has_result();
        let settled = self.detector.observe(self.now, &sample);

        if was_showing && !self.detector.has_result() {
            self.emit(WagerEvent::Cue(Cue::HideFace));
        }

        if let Some(event) = settled {
            tracing::debug!(face = %event.face, time = event.time, "die settled");
            self.emit(WagerEvent::Cue(Cue::ShowFace(event.face)));
            self.step(Trigger::Settled(event.face));
        }
    }

    fn advance_timers(&mut self, dt: f32) {
        if let Some(elapsed) = self.voice_line_in.as_mut() {
            *elapsed += dt;
            if *elapsed >= self.config.intro_voice_delay {
                self.voice_line_in = None;
                self.emit(WagerEvent::Cue(Cue::IntroVoiceLine));
            }
        }

        match self.panel.tick(dt) {
            Some(PanelEvent::Opened) => tracing::debug!("reward panel open"),
            Some(PanelEvent::RevealComplete { slot, reward }) => {
                self.step(Trigger::RevealComplete { slot, reward });
            }
            None => {}
        }
    }

    /// The transition function.
    fn step(&mut self, trigger: Trigger) {
        match (self.state, trigger) {
            (WagerState::Intro, Trigger::Accept) => {
                self.enter(WagerState::GameRolling { in_flight: false }, PhaseDetail::HouseThrowing);
                if self.launch() {
                    self.state = WagerState::GameRolling { in_flight: true };
                }
            }

            (WagerState::Intro, Trigger::Decline) => {
                self.enter(WagerState::Idle { outcome: None }, PhaseDetail::Declined);
            }

            (WagerState::GameRolling { in_flight: true }, Trigger::Settled(house)) => {
                self.enter(
                    WagerState::PlayerRolling {
                        house,
                        in_flight: false,
                    },
                    PhaseDetail::HouseRolled(house),
                );
            }

            (WagerState::PlayerRolling { house, in_flight: false }, Trigger::Tap) => {
                if self.launch() {
                    self.state = WagerState::PlayerRolling {
                        house,
                        in_flight: true,
                    };
                }
            }

            (WagerState::PlayerRolling { house, in_flight: true }, Trigger::Settled(player)) => {
                self.enter(WagerState::Compare { house, player }, PhaseDetail::PlayerRolled(player));
                self.step(Trigger::Evaluate);
            }

            (WagerState::Compare { house, player }, Trigger::Evaluate) => {
                let outcome = WagerOutcome::decide(house, player);
                self.last_outcome = Some(outcome);
                tracing::info!(
                    house = %house,
                    player = %player,
                    player_won = outcome.player_won,
                    "wager decided"
                );

                if outcome.player_won {
                    self.panel.open();
                    self.enter(WagerState::Reward { house, player }, PhaseDetail::Compared(outcome));
                } else {
                    self.enter(
                        WagerState::Idle {
                            outcome: Some(outcome),
                        },
                        PhaseDetail::Compared(outcome),
                    );
                }
                self.emit(WagerEvent::WagerResult {
                    player_won: outcome.player_won,
                });
            }

            (WagerState::Reward { .. }, Trigger::RevealComplete { slot, reward }) => {
                self.panel.hide();
                self.enter(
                    WagerState::Idle {
                        outcome: self.last_outcome,
                    },
                    PhaseDetail::RewardRevealed { slot, reward },
                );
            }

            (state, trigger) => {
                tracing::trace!(phase = %state.phase(), ?trigger, "trigger ignored");
            }
        }
    }

    /// Launch a throw. False if there is no body.
    fn launch(&mut self) -> bool {
        let was_showing = self.detector.has_result();

        match self.launcher.launch(self.body.as_mut(), &mut self.rng) {
            Ok(_) => {
                self.detector.reset(self.now);
                if was_showing {
                    self.emit(WagerEvent::Cue(Cue::HideFace));
                }
                self.emit(WagerEvent::Cue(Cue::RollClick));
                true
            }
            Err(err) => {
                tracing::warn!(phase = %self.phase(), %err, "throw not launched; wager stalled");
                false
            }
        }
    }

    fn enter(&mut self, state: WagerState, detail: PhaseDetail) {
        let from = self.state.phase();
        self.state = state;
        tracing::debug!(from = %from, to = %state.phase(), ?detail, "phase changed");
        self.emit(WagerEvent::PhaseChanged {
            phase: state.phase(),
            detail,
        });
    }

    fn announce_intro(&mut self) {
        self.emit(WagerEvent::PhaseChanged {
            phase: Phase::Intro,
            detail: PhaseDetail::Prompt,
        });
    }

    fn emit(&mut self, event: WagerEvent) {
        event.dispatch(&mut self.observer);
        self.history.push_back(event);
    }
}
