//! Roll launcher: starts a throw.
//!
//! A launch teleports the die to the drop position with a uniformly random
//! orientation, then kicks it with a force impulse (random horizontal,
//! fixed upward) and a torque impulse (random direction, fixed magnitude).

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use crate::core::config::LaunchConfig;
use crate::core::error::DuelError;
use crate::core::rng::GameRng;

/// Everything applied to the body by one launch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchImpulse {
    pub position: Vec3,
    pub orientation: Quat,
    pub force: Vec3,
    pub torque: Vec3,
}

/// Stateless throw trigger.
#[derive(Clone, Debug)]
pub struct RollLauncher {
    config: LaunchConfig,
}

impl RollLauncher {
    /// Create a launcher with the given throw parameters.
    #[must_use]
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Throw parameters in use.
    #[must_use]
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Draw a launch without touching any body.
    #[must_use]
    pub fn sample(&self, rng: &mut GameRng) -> LaunchImpulse {
        let h = self.config.horizontal_force;
        let force = Vec3::new(
            rng.gen_range_f32(-h, h),
            self.config.vertical_force,
            rng.gen_range_f32(-h, h),
        );

        LaunchImpulse {
            position: self.config.drop_position,
            orientation: rng.unit_rotation(),
            force,
            torque: rng.unit_vector() * self.config.torque_magnitude,
        }
    }

    /// Throw the die.
    ///
    /// With no body attached this logs and returns [`DuelError::MissingBody`]
    /// without consuming randomness.
    pub fn launch<B: PhysicsBody>(
        &self,
        body: Option<&mut B>,
        rng: &mut GameRng,
    ) -> Result<LaunchImpulse, DuelError> {
        let Some(body) = body else {
            tracing::warn!("launch requested with no physics body attached");
            return Err(DuelError::MissingBody);
        };

        let impulse = self.sample(rng);
        body.reset_transform(impulse.position, impulse.orientation);
        body.apply_impulse(impulse.force, impulse.torque);

        tracing::debug!(
            force = ?impulse.force,
            torque = ?impulse.torque,
            "die launched"
        );

        Ok(impulse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::scripted::ScriptedBody;

    #[test]
    fn test_launch_applies_impulse() {
        let launcher = RollLauncher::new(LaunchConfig::default());
        let mut body = ScriptedBody::new();
        let mut rng = GameRng::new(42);

        let impulse = launcher.launch(Some(&mut body), &mut rng).unwrap();

        assert_eq!(body.launch_count(), 1);
        assert_eq!(body.last_impulse(), Some((impulse.force, impulse.torque)));
        assert_eq!(body.position(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_impulse_bounds() {
        let launcher = RollLauncher::new(LaunchConfig::default());
        let mut rng = GameRng::new(5);

        for _ in 0..200 {
            let impulse = launcher.sample(&mut rng);
            assert!(impulse.force.x.abs() <= 2.0);
            assert!(impulse.force.z.abs() <= 2.0);
            assert_eq!(impulse.force.y, 5.0);
            assert!((impulse.torque.length() - 10.0).abs() < 1e-3);
            assert!((impulse.orientation.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_missing_body_is_noop() {
        let launcher = RollLauncher::new(LaunchConfig::default());
        let mut rng = GameRng::new(42);
        let before = rng.state();

        let result = launcher.launch::<ScriptedBody>(None, &mut rng);

        assert!(matches!(result, Err(DuelError::MissingBody)));
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_launches_are_deterministic() {
        let launcher = RollLauncher::new(LaunchConfig::default());
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);

        assert_eq!(launcher.sample(&mut a), launcher.sample(&mut b));
    }
}
