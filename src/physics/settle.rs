//! Settle detection.
//!
//! A single velocity sample is a poor rest test: a die rocking on an edge
//! passes through zero velocity twice per wobble. The detector instead
//! requires a sustained quiet period plus ground contact.
//!
//! ## States
//!
//! - **Moving**: a sample exceeded a threshold. Any published result is
//!   withdrawn and the quiet period restarts.
//! - **Settled**: the die has been quiet for `duration` seconds and is
//!   grounded. Entering this state publishes one [`SettleEvent`].
//!
//! Time is passed in by the caller, so the detector is frame-rate
//! independent and trivially testable. Timestamps are `f64` seconds; a
//! session that has run for days still resolves individual frames.

use glam::Quat;
use serde::{Deserialize, Serialize};

use super::body::MotionSample;
use crate::core::config::SettleConfig;
use crate::core::face::{top_face, FaceValue};

/// Published once when a throw comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettleEvent {
    /// Time the detector entered Settled.
    pub time: f64,
    /// Orientation at rest.
    pub orientation: Quat,
    /// Value showing on top.
    pub face: FaceValue,
}

/// Detector state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettleState {
    Moving,
    Settled,
}

/// Watches motion samples and decides when a throw is over.
#[derive(Clone, Debug)]
pub struct SettleDetector {
    config: SettleConfig,
    state: SettleState,
    last_motion: f64,
    /// Start of the current uninterrupted quiet period.
    quiet_since: Option<f64>,
    has_result: bool,
}

impl SettleDetector {
    /// Create a detector. It starts Settled with nothing pending, so
    /// nothing is published until the die moves.
    #[must_use]
    pub fn new(config: SettleConfig) -> Self {
        Self {
            config,
            state: SettleState::Settled,
            last_motion: 0.0,
            quiet_since: None,
            has_result: false,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SettleState {
        self.state
    }

    /// Is the die currently considered moving?
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.state == SettleState::Moving
    }

    /// Has a result been published since the last motion?
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.has_result
    }

    /// Last time a sample exceeded a threshold (or the last reset).
    #[must_use]
    pub fn last_motion_time(&self) -> f64 {
        self.last_motion
    }

    /// Thresholds in use.
    #[must_use]
    pub fn config(&self) -> &SettleConfig {
        &self.config
    }

    /// Force the Moving state, as if motion was seen at `now`.
    ///
    /// Called whenever a throw is launched so the previous throw's quiet
    /// period never counts toward the next.
    pub fn reset(&mut self, now: f64) {
        self.state = SettleState::Moving;
        self.last_motion = now;
        self.quiet_since = None;
        self.has_result = false;
    }

    /// Feed one sample. Returns an event on the tick the die settles.
    ///
    /// The quiet period is timed from the first quiet sample, not from the
    /// last moving one, so the event lands one tick after
    /// `last_motion_time() + duration` would put it.
    pub fn observe(&mut self, now: f64, sample: &MotionSample) -> Option<SettleEvent> {
        if sample.linear_speed > self.config.velocity
            || sample.angular_speed > self.config.angular_velocity
        {
            self.reset(now);
            return None;
        }

        if self.state == SettleState::Settled {
            return None;
        }

        let quiet_since = *self.quiet_since.get_or_insert(now);

        if now - quiet_since >= f64::from(self.config.duration) && sample.grounded {
            self.state = SettleState::Settled;
            self.has_result = true;
            return Some(SettleEvent {
                time: now,
                orientation: sample.orientation,
                face: top_face(sample.orientation),
            });
        }

        None
    }
}
