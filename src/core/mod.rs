//! Core engine types: face values, RNG, configuration, errors.
//!
//! These are the leaf building blocks. Nothing in here knows about wager
//! phases or physics bodies.

pub mod config;
pub mod error;
pub mod face;
pub mod rng;

pub use config::{DuelConfig, LaunchConfig, RewardConfig, SettleConfig};
pub use error::{DuelError, FaceOutOfRange};
pub use face::{resolve_frame, top_face, Axis, AxisFrame, FaceValue};
pub use rng::{GameRng, GameRngState};
