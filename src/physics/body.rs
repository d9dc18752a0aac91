//! The physics body collaborator.
//!
//! The engine never integrates physics. Hosts wrap their rigid body in a
//! type implementing [`PhysicsBody`]; the engine samples it once per tick and
//! pokes it when a throw starts.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// One tick's worth of motion data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// Magnitude of linear velocity.
    pub linear_speed: f32,

    /// Magnitude of angular velocity.
    pub angular_speed: f32,

    /// Is the body resting on a supporting surface?
    pub grounded: bool,

    /// Current world orientation.
    pub orientation: Quat,
}

impl MotionSample {
    /// A motionless, grounded sample at the given orientation.
    #[must_use]
    pub fn at_rest(orientation: Quat) -> Self {
        Self {
            linear_speed: 0.0,
            angular_speed: 0.0,
            grounded: true,
            orientation,
        }
    }

    /// A sample moving at the given speeds, off the ground.
    #[must_use]
    pub fn moving(linear_speed: f32, angular_speed: f32) -> Self {
        Self {
            linear_speed,
            angular_speed,
            grounded: false,
            orientation: Quat::IDENTITY,
        }
    }
}

/// A rigid body the engine can sample and throw.
pub trait PhysicsBody {
    /// Sample current motion.
    fn sample_motion(&self) -> MotionSample;

    /// Teleport the body, zeroing linear and angular velocity.
    fn reset_transform(&mut self, position: Vec3, orientation: Quat);

    /// Apply instantaneous force and torque impulses.
    fn apply_impulse(&mut self, force: Vec3, torque: Vec3);
}

impl<B: PhysicsBody + ?Sized> PhysicsBody for Box<B> {
    fn sample_motion(&self) -> MotionSample {
        (**self).sample_motion()
    }

    fn reset_transform(&mut self, position: Vec3, orientation: Quat) {
        (**self).reset_transform(position, orientation);
    }

    fn apply_impulse(&mut self, force: Vec3, torque: Vec3) {
        (**self).apply_impulse(force, torque);
    }
}
