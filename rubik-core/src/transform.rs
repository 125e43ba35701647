/// 3D transformation matrices and whole-cube orientation state
use nalgebra::{Matrix4, Vector3};

use crate::lattice::{GridPos, Orientation};

/// Whole-cube orientation (in radians), applied as pitch about X then yaw about Y
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CubeOrientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl CubeOrientation {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Move a `factor` fraction of the remaining way towards (`pitch`, `yaw`)
    pub fn approach(&mut self, pitch: f32, yaw: f32, factor: f32) {
        self.pitch += (pitch - self.pitch) * factor;
        self.yaw += (yaw - self.yaw) * factor;
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation matrix of the whole cube: Rx(pitch) * Ry(yaw)
    pub fn rotation_matrix(orientation: &CubeOrientation) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(orientation.pitch, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, orientation.yaw, 0.0));
        rx * ry
    }

    /// Placement of a cubelet inside the cube: translate(position) * orientation
    pub fn cubelet_matrix(position: &GridPos, orientation: &Orientation) -> Matrix4<f32> {
        let translation = Self::translation_matrix(
            position.x as f32,
            position.y as f32,
            position.z as f32,
        );
        translation * orientation.to_f32().to_homogeneous()
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Axis, Direction};
    use nalgebra::Point3;

    #[test]
    fn test_approach() {
        let mut orientation = CubeOrientation::default();
        orientation.approach(1.0, -2.0, 0.5);
        assert!((orientation.pitch - 0.5).abs() < 1e-6);
        assert!((orientation.yaw + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&CubeOrientation::default());
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_cubelet_matrix_places_corner() {
        let orientation = Orientation::quarter_turn(Axis::Z, Direction::Positive);
        let matrix = Transform::cubelet_matrix(&GridPos::new(1, -1, 0), &orientation);
        let p = matrix.transform_point(&Point3::new(0.5, 0.0, 0.0));
        assert!((p - Point3::new(1.0, -0.5, 0.0)).norm() < 1e-6);
    }
}
