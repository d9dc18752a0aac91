//! Face values and the orientation resolver.
//!
//! A die has six local axes. Whichever axis points most nearly at the sky
//! once the die is at rest decides the rolled value. The mapping from axis
//! to value is a fixed table keyed by [`Axis`]:
//!
//! | Axis     | Value |
//! |----------|-------|
//! | +up      | 2     |
//! | -up      | 5     |
//! | +forward | 1     |
//! | -forward | 6     |
//! | +right   | 4     |
//! | -right   | 3     |
//!
//! Frames are Y-up: up = +Y, forward = +Z, right = +X.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::error::FaceOutOfRange;

/// A rolled value, always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FaceValue(u8);

impl FaceValue {
    /// Smallest face value.
    pub const MIN: FaceValue = FaceValue(1);
    /// Largest face value.
    pub const MAX: FaceValue = FaceValue(6);

    /// Create a face value, or `None` if outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 6 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Does this roll beat `other`? Ties never beat.
    #[must_use]
    pub fn beats(self, other: FaceValue) -> bool {
        self.0 > other.0
    }
}

impl TryFrom<u8> for FaceValue {
    type Error = FaceOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FaceValue::new(value).ok_or(FaceOutOfRange(value))
    }
}

impl From<FaceValue> for u8 {
    fn from(face: FaceValue) -> u8 {
        face.0
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the six local axes of the die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Up,
    Down,
    Forward,
    Back,
    Right,
    Left,
}

impl Axis {
    /// All axes in tie-break order.
    pub const ALL: [Axis; 6] = [
        Axis::Up,
        Axis::Down,
        Axis::Forward,
        Axis::Back,
        Axis::Right,
        Axis::Left,
    ];

    /// The face value printed on this axis.
    #[must_use]
    pub const fn face_value(self) -> FaceValue {
        match self {
            Axis::Up => FaceValue(2),
            Axis::Down => FaceValue(5),
            Axis::Forward => FaceValue(1),
            Axis::Back => FaceValue(6),
            Axis::Right => FaceValue(4),
            Axis::Left => FaceValue(3),
        }
    }

    /// The axis carrying a given face value.
    #[must_use]
    pub fn for_face(face: FaceValue) -> Axis {
        match face.get() {
            1 => Axis::Forward,
            2 => Axis::Up,
            3 => Axis::Left,
            4 => Axis::Right,
            5 => Axis::Down,
            _ => Axis::Back,
        }
    }

    /// Direction of this axis in the die's local frame.
    #[must_use]
    pub const fn local(self) -> Vec3 {
        match self {
            Axis::Up => Vec3::Y,
            Axis::Down => Vec3::NEG_Y,
            Axis::Forward => Vec3::Z,
            Axis::Back => Vec3::NEG_Z,
            Axis::Right => Vec3::X,
            Axis::Left => Vec3::NEG_X,
        }
    }

    /// An orientation that leaves `face` pointing at the sky.
    #[must_use]
    pub fn orientation_for(face: FaceValue) -> Quat {
        Quat::from_rotation_arc(Axis::for_face(face).local(), Vec3::Y)
    }
}

/// The six local axes projected into world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFrame {
    directions: [Vec3; 6],
}

impl AxisFrame {
    /// Build a frame from world-space directions given in [`Axis::ALL`] order.
    #[must_use]
    pub const fn from_directions(directions: [Vec3; 6]) -> Self {
        Self { directions }
    }

    /// Project the local axes through an orientation.
    #[must_use]
    pub fn from_orientation(orientation: Quat) -> Self {
        Self {
            directions: Axis::ALL.map(|axis| orientation * axis.local()),
        }
    }

    /// World direction of one axis.
    #[must_use]
    pub fn direction(&self, axis: Axis) -> Vec3 {
        self.directions[axis as usize]
    }

    /// The axis most nearly pointing up. First axis wins ties.
    #[must_use]
    pub fn top_axis(&self) -> Axis {
        let mut best = Axis::ALL[0];
        let mut best_dot = f32::NEG_INFINITY;

        for axis in Axis::ALL {
            let dot = self.direction(axis).dot(Vec3::Y);
            if dot > best_dot {
                best_dot = dot;
                best = axis;
            }
        }

        best
    }
}

/// Resolve a projected frame to the value showing on top.
#[must_use]
pub fn resolve_frame(frame: &AxisFrame) -> FaceValue {
    frame.top_axis().face_value()
}

/// Resolve an orientation to the value showing on top.
#[must_use]
pub fn top_face(orientation: Quat) -> FaceValue {
    resolve_frame(&AxisFrame::from_orientation(orientation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_face_value_bounds() {
        assert!(FaceValue::new(0).is_none());
        assert!(FaceValue::new(7).is_none());
        assert_eq!(FaceValue::new(1), Some(FaceValue::MIN));
        assert_eq!(FaceValue::new(6), Some(FaceValue::MAX));
    }

    #[test]
    fn test_try_from_reports_raw_value() {
        assert_eq!(FaceValue::try_from(4u8), Ok(FaceValue(4)));
        let err = FaceValue::try_from(0u8).unwrap_err();
        assert_eq!(err, FaceOutOfRange(0));
        assert_eq!(err.to_string(), "face value 0 outside 1..=6");
    }

    #[test]
    fn test_face_value_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&FaceValue::MAX).unwrap(), "6");
        assert_eq!(serde_json::from_str::<FaceValue>("3").unwrap().get(), 3);
        assert!(serde_json::from_str::<FaceValue>("9").is_err());
    }

    #[test]
    fn test_face_table_is_a_permutation() {
        let values: HashSet<u8> = Axis::ALL.iter().map(|a| a.face_value().get()).collect();
        assert_eq!(values, (1..=6).collect::<HashSet<u8>>());
    }

    #[test]
    fn test_for_face_inverts_table() {
        for axis in Axis::ALL {
            assert_eq!(Axis::for_face(axis.face_value()), axis);
        }
    }

    #[test]
    fn test_identity_orientation_rolls_two() {
        assert_eq!(top_face(Quat::IDENTITY), FaceValue::new(2).unwrap());
    }

    #[test]
    fn test_each_axis_aligned_up() {
        for axis in Axis::ALL {
            let q = Quat::from_rotation_arc(axis.local(), Vec3::Y);
            assert_eq!(top_face(q), axis.face_value(), "axis {:?}", axis);
        }
    }

    #[test]
    fn test_upside_down_rolls_five() {
        let q = Quat::from_rotation_x(std::f32::consts::PI);
        assert_eq!(top_face(q), FaceValue::new(5).unwrap());
    }

    #[test]
    fn test_tie_goes_to_first_axis() {
        // Up and Forward both at 45 degrees to the sky: Up comes first.
        let d = std::f32::consts::FRAC_1_SQRT_2;
        let frame = AxisFrame::from_directions([
            Vec3::new(0.0, d, -d),
            Vec3::new(0.0, -d, d),
            Vec3::new(0.0, d, d),
            Vec3::new(0.0, -d, -d),
            Vec3::X,
            Vec3::NEG_X,
        ]);
        assert_eq!(frame.top_axis(), Axis::Up);

        // Right and Left tied at straight up: Right is listed first.
        let frame = AxisFrame::from_directions([
            Vec3::NEG_Y,
            Vec3::NEG_Y,
            Vec3::NEG_Y,
            Vec3::NEG_Y,
            Vec3::Y,
            Vec3::Y,
        ]);
        assert_eq!(frame.top_axis(), Axis::Right);
    }

    #[test]
    fn test_beats_is_strict() {
        let three = FaceValue::new(3).unwrap();
        let five = FaceValue::new(5).unwrap();
        assert!(five.beats(three));
        assert!(!three.beats(five));
        assert!(!five.beats(five));
    }

    #[test]
    fn test_orientation_for_round_trips() {
        for v in 1..=6 {
            let face = FaceValue::new(v).unwrap();
            assert_eq!(top_face(Axis::orientation_for(face)), face);
        }
    }

    proptest! {
        #[test]
        fn prop_resolved_axis_is_maximal(
            x in -1.0f32..1.0, y in -1.0f32..1.0, z in -1.0f32..1.0, w in -1.0f32..1.0,
        ) {
            let q = Quat::from_xyzw(x, y, z, w);
            prop_assume!(q.length() > 0.1);
            let q = q.normalize();

            let frame = AxisFrame::from_orientation(q);
            let top = frame.top_axis();
            let top_dot = frame.direction(top).dot(Vec3::Y);

            for axis in Axis::ALL {
                prop_assert!(frame.direction(axis).dot(Vec3::Y) <= top_dot);
            }
            prop_assert_eq!(top_face(q), top.face_value());
        }
    }
}
