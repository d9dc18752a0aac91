//! A scripted stand-in for a real rigid body.
//!
//! `ScriptedBody` does no integration. After each impulse it reports motion
//! for a fixed number of samples, then comes to rest showing the next face
//! from its landing script. With an empty script it rests in whatever
//! orientation the launch gave it.
//!
//! Used by tests and benches, and handy for prototyping a host before the
//! physics layer exists.

use std::cell::Cell;
use std::collections::VecDeque;

use glam::{Quat, Vec3};

use super::body::{MotionSample, PhysicsBody};
use crate::core::face::{Axis, FaceValue};

/// Default number of moving samples after an impulse.
pub const DEFAULT_FLIGHT_SAMPLES: u32 = 4;

/// Deterministic physics body driven by a landing script.
#[derive(Clone, Debug)]
pub struct ScriptedBody {
    position: Vec3,
    orientation: Quat,
    landings: VecDeque<FaceValue>,
    flight_samples: u32,
    remaining: Cell<u32>,
    launches: u32,
    last_impulse: Option<(Vec3, Vec3)>,
}

impl Default for ScriptedBody {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedBody {
    /// A body at rest at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            landings: VecDeque::new(),
            flight_samples: DEFAULT_FLIGHT_SAMPLES,
            remaining: Cell::new(0),
            launches: 0,
            last_impulse: None,
        }
    }

    /// Queue faces for successive throws to land on.
    #[must_use]
    pub fn landing_on(mut self, faces: impl IntoIterator<Item = FaceValue>) -> Self {
        self.landings.extend(faces);
        self
    }

    /// Set how many moving samples follow each impulse.
    #[must_use]
    pub fn with_flight_samples(mut self, samples: u32) -> Self {
        self.flight_samples = samples;
        self
    }

    /// Queue one more landing.
    pub fn push_landing(&mut self, face: FaceValue) {
        self.landings.push_back(face);
    }

    /// Knock the body so it moves for `samples` samples without a launch.
    pub fn bump(&mut self, samples: u32) {
        self.remaining.set(samples);
    }

    /// Number of impulses applied so far.
    #[must_use]
    pub fn launch_count(&self) -> u32 {
        self.launches
    }

    /// Force and torque of the most recent impulse.
    #[must_use]
    pub fn last_impulse(&self) -> Option<(Vec3, Vec3)> {
        self.last_impulse
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Is the body mid-flight?
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.remaining.get() > 0
    }
}

impl PhysicsBody for ScriptedBody {
    fn sample_motion(&self) -> MotionSample {
        let remaining = self.remaining.get();
        if remaining > 0 {
            self.remaining.set(remaining - 1);
            return MotionSample::moving(1.0, 1.0);
        }
        MotionSample::at_rest(self.orientation)
    }

    fn reset_transform(&mut self, position: Vec3, orientation: Quat) {
        self.position = position;
        self.orientation = orientation;
        self.remaining.set(0);
    }

    fn apply_impulse(&mut self, force: Vec3, torque: Vec3) {
        self.launches += 1;
        self.last_impulse = Some((force, torque));
        self.remaining.set(self.flight_samples);

        if let Some(face) = self.landings.pop_front() {
            self.orientation = Axis::orientation_for(face);
        }
    }
}
