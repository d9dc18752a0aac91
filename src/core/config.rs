//! Duel configuration.
//!
//! Hosts configure the engine at startup by providing:
//! - `SettleConfig`: When a thrown die counts as at rest
//! - `LaunchConfig`: Where the die drops from and how hard it is thrown
//! - `RewardConfig`: Panel size and animation timings
//! - `DuelConfig`: Combines all configuration
//!
//! Every section deserializes with defaults, so a host may supply only the
//! fields it wants to change.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::DuelError;

/// Thresholds for the settle detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    /// Linear speed at or below which the die counts as still.
    pub velocity: f32,

    /// Angular speed at or below which the die counts as still.
    pub angular_velocity: f32,

    /// Seconds the die must stay still (and grounded) before it settles.
    pub duration: f32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            velocity: 0.05,
            angular_velocity: 0.05,
            duration: 0.6,
        }
    }
}

/// Throw parameters for the roll launcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// World position the die is reset to before each throw.
    pub drop_position: Vec3,

    /// Bound on the random X and Z impulse components.
    pub horizontal_force: f32,

    /// Fixed upward impulse component.
    pub vertical_force: f32,

    /// Magnitude of the random-direction torque impulse.
    pub torque_magnitude: f32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            drop_position: Vec3::new(0.0, 2.0, 0.0),
            horizontal_force: 2.0,
            vertical_force: 5.0,
            torque_magnitude: 10.0,
        }
    }
}

/// Reward panel layout and timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Number of face-down cards offered to a winner.
    pub slots: usize,

    /// Seconds the panel takes to slide in. Selection is locked meanwhile.
    pub slide_in_duration: f32,

    /// Seconds for the card flip (shrink then expand).
    pub flip_duration: f32,

    /// Seconds the revealed card is held before the wager ends.
    pub hold_duration: f32,
}

impl RewardConfig {
    /// Total time from selection to completion.
    #[must_use]
    pub fn reveal_duration(&self) -> f32 {
        self.flip_duration + self.hold_duration
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            slots: 5,
            slide_in_duration: 0.8,
            flip_duration: 0.6,
            hold_duration: 2.0,
        }
    }
}

/// Complete duel configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Seed for throw randomness.
    pub seed: u64,

    /// Seconds into the intro before the voice line cue fires.
    pub intro_voice_delay: f32,

    pub settle: SettleConfig,
    pub launch: LaunchConfig,
    pub reward: RewardConfig,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            intro_voice_delay: 2.0,
            settle: SettleConfig::default(),
            launch: LaunchConfig::default(),
            reward: RewardConfig::default(),
        }
    }
}

impl DuelConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, DuelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the settle thresholds.
    #[must_use]
    pub fn with_settle(mut self, settle: SettleConfig) -> Self {
        self.settle = settle;
        self
    }

    /// Set only the settle duration.
    #[must_use]
    pub fn with_settle_duration(mut self, seconds: f32) -> Self {
        self.settle.duration = seconds;
        self
    }

    /// Replace the launch parameters.
    #[must_use]
    pub fn with_launch(mut self, launch: LaunchConfig) -> Self {
        self.launch = launch;
        self
    }

    /// Replace the reward panel settings.
    #[must_use]
    pub fn with_reward(mut self, reward: RewardConfig) -> Self {
        self.reward = reward;
        self
    }

    /// Set the number of reward slots.
    #[must_use]
    pub fn with_reward_slots(mut self, slots: usize) -> Self {
        self.reward.slots = slots;
        self
    }

    /// Set the intro voice line delay.
    #[must_use]
    pub fn with_intro_voice_delay(mut self, seconds: f32) -> Self {
        self.intro_voice_delay = seconds;
        self
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<(), DuelError> {
        let non_negative = [
            ("settle.velocity", self.settle.velocity),
            ("settle.angular_velocity", self.settle.angular_velocity),
            ("settle.duration", self.settle.duration),
            ("launch.horizontal_force", self.launch.horizontal_force),
            ("launch.torque_magnitude", self.launch.torque_magnitude),
            ("reward.slide_in_duration", self.reward.slide_in_duration),
            ("reward.flip_duration", self.reward.flip_duration),
            ("reward.hold_duration", self.reward.hold_duration),
            ("intro_voice_delay", self.intro_voice_delay),
        ];

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(DuelError::InvalidConfig(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if !self.launch.drop_position.is_finite() {
            return Err(DuelError::InvalidConfig("launch.drop_position must be finite".into()));
        }

        if !self.launch.vertical_force.is_finite() || self.launch.vertical_force <= 0.0 {
            return Err(DuelError::InvalidConfig(format!(
                "launch.vertical_force must be positive, got {}",
                self.launch.vertical_force
            )));
        }

        if self.reward.slots == 0 {
            return Err(DuelError::InvalidConfig("reward.slots must be at least 1".into()));
        }

        Ok(())
    }
}
