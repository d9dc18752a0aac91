//! # dice-duel
//!
//! A dice-wager duel engine: the house throws a die, the player throws a
//! die, and a strictly higher player roll wins a pick from a panel of
//! face-down reward cards.
//!
//! ## Design Principles
//!
//! 1. **Physics-Agnostic**: The engine never integrates physics. Hosts
//!    provide a `PhysicsBody`; the engine samples it and decides when a
//!    throw is over.
//!
//! 2. **Tick-Driven**: Every wait (quiet period, animations, voice cue) is
//!    an elapsed-time accumulator advanced by `WagerSession::tick`. Nothing
//!    blocks.
//!
//! 3. **Unrepresentable Bad States**: Each phase variant carries exactly the
//!    rolls that exist at that point.
//!
//! ## Modules
//!
//! - `core`: Face values, orientation resolver, RNG, configuration, errors
//! - `physics`: Body trait, settle detector, roll launcher, scripted body
//! - `reward`: Reward table, cards, and the selection panel
//! - `wager`: Phases, events, input, and the session state machine

pub mod core;
pub mod physics;
pub mod reward;
pub mod wager;

// Re-export commonly used types
pub use crate::core::{
    top_face, Axis, AxisFrame, DuelConfig, DuelError, FaceValue, GameRng, GameRngState,
    LaunchConfig, RewardConfig, SettleConfig,
};

pub use crate::physics::{
    LaunchImpulse, MotionSample, PhysicsBody, RollLauncher, ScriptedBody, SettleDetector,
    SettleEvent, SettleState,
};

pub use crate::reward::{PanelEvent, PanelState, RewardCard, RewardId, RewardPanel, RewardTable};

pub use crate::wager::{
    Cue, Phase, PhaseDetail, PlayerInput, SessionSnapshot, WagerEvent, WagerObserver,
    WagerOutcome, WagerSession, WagerState,
};
