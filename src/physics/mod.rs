//! Physics-facing components.
//!
//! The engine does not simulate physics. It samples a host-provided body
//! ([`PhysicsBody`]), decides when a throw has come to rest
//! ([`SettleDetector`]), and starts new throws ([`RollLauncher`]).
//!
//! ```
//! use dice_duel::core::{FaceValue, GameRng, LaunchConfig, SettleConfig};
//! use dice_duel::physics::{PhysicsBody, RollLauncher, ScriptedBody, SettleDetector};
//!
//! let five = FaceValue::new(5).unwrap();
//! let mut body = ScriptedBody::new().landing_on([five]);
//! let mut detector = SettleDetector::new(SettleConfig::default());
//! let launcher = RollLauncher::new(LaunchConfig::default());
//! let mut rng = GameRng::new(42);
//!
//! launcher.launch(Some(&mut body), &mut rng).unwrap();
//! detector.reset(0.0);
//!
//! let mut face = None;
//! for i in 1..=40u32 {
//!     if let Some(event) = detector.observe(f64::from(i) * 0.05, &body.sample_motion()) {
//!         face = Some(event.face);
//!     }
//! }
//! assert_eq!(face, Some(five));
//! ```

pub mod body;
pub mod launcher;
pub mod scripted;
pub mod settle;

pub use body::{MotionSample, PhysicsBody};
pub use launcher::{LaunchImpulse, RollLauncher};
pub use scripted::ScriptedBody;
pub use settle::{SettleDetector, SettleEvent, SettleState};
