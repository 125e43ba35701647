/// Discrete lattice vocabulary: axes, quarter-turn directions and orientations
use nalgebra::{Matrix3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::fmt;

/// Integer grid coordinate, each component in {-1, 0, 1}
pub type GridPos = Vector3<i32>;

/// Principal axis of the cube frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a 3-vector
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn unit_axis(self) -> Unit<Vector3<f32>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }

    /// Read this axis' component of a grid position
    pub fn component(self, position: &GridPos) -> i32 {
        position[self.index()]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Sign of a quarter turn (right-handed about the positive axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Direction of a non-zero scalar; zero has no direction
    pub fn from_sign(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(Direction::Positive)
        } else if value < 0.0 {
            Some(Direction::Negative)
        } else {
            None
        }
    }

    pub fn sign(self) -> i32 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }

    /// Signed quarter-turn angle in radians
    pub fn quarter_angle(self) -> f32 {
        self.sign() as f32 * FRAC_PI_2
    }
}

/// Quantized rotation of a cubelet.
///
/// Stored as a signed permutation matrix with determinant +1, so every face
/// stays axis-aligned and comparisons are exact (angles are implicitly taken
/// modulo 360°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation(Matrix3<i32>);

impl Orientation {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Exact 90° rotation about `axis`
    pub fn quarter_turn(axis: Axis, direction: Direction) -> Self {
        let positive = match axis {
            Axis::X => Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0),
            Axis::Y => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0),
            Axis::Z => Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1),
        };
        match direction {
            Direction::Positive => Self(positive),
            Direction::Negative => Self(positive.transpose()),
        }
    }

    /// Snap a float rotation matrix to the nearest integer entries
    pub fn from_rotation_rounded(matrix: &Matrix3<f32>) -> Self {
        Self(matrix.map(|v| v.round() as i32))
    }

    /// Apply `self` first, then `after`
    pub fn then(&self, after: &Orientation) -> Orientation {
        Orientation(after.0 * self.0)
    }

    pub fn inverse(&self) -> Orientation {
        Orientation(self.0.transpose())
    }

    pub fn rotate(&self, v: &GridPos) -> GridPos {
        self.0 * v
    }

    pub fn matrix(&self) -> &Matrix3<i32> {
        &self.0
    }

    pub fn to_f32(&self) -> Matrix3<f32> {
        self.0.map(|v| v as f32)
    }

    /// Whether this is a proper signed permutation (a cube symmetry)
    pub fn is_proper(&self) -> bool {
        let columns: Vec<GridPos> = (0..3).map(|i| self.0.column(i).into_owned()).collect();
        let unit = |c: &GridPos| c.iter().map(|v| v.abs()).sum::<i32>() == 1 && c.iter().all(|v| v.abs() <= 1);
        columns.iter().all(unit) && columns[0].cross(&columns[1]) == columns[2]
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::from_sign(3.0), Some(Direction::Positive));
        assert_eq!(Direction::from_sign(-0.5), Some(Direction::Negative));
        assert_eq!(Direction::from_sign(0.0), None);
        assert_eq!(Direction::Positive.reversed(), Direction::Negative);
    }

    #[test]
    fn test_quarter_turn_about_x() {
        let turn = Orientation::quarter_turn(Axis::X, Direction::Negative);
        assert_eq!(turn.rotate(&GridPos::new(1, 1, 0)), GridPos::new(1, 0, -1));
        assert_eq!(turn.rotate(&GridPos::new(0, 0, 1)), GridPos::new(0, 1, 0));
    }

    #[test]
    fn test_quarter_turns_are_proper_and_cancel() {
        for axis in Axis::ALL {
            let turn = Orientation::quarter_turn(axis, Direction::Positive);
            assert!(turn.is_proper());
            let back = turn.then(&Orientation::quarter_turn(axis, Direction::Negative));
            assert_eq!(back, Orientation::identity());
        }
    }

    #[test]
    fn test_quarter_turn_matches_float_rotation() {
        for axis in Axis::ALL {
            let float = nalgebra::Rotation3::from_axis_angle(
                &axis.unit_axis(),
                Direction::Positive.quarter_angle(),
            );
            let snapped = Orientation::from_rotation_rounded(float.matrix());
            assert_eq!(snapped, Orientation::quarter_turn(axis, Direction::Positive));
        }
    }

    #[test]
    fn test_reflection_is_not_proper() {
        let mirror = Orientation(Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, 1));
        assert!(!mirror.is_proper());
    }
}
