/// Perspective camera and point projection for the hosts
use nalgebra::{Matrix4, Point3, Vector3};

/// A point projected into screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Normalized device depth, smaller is nearer
    pub depth: f32,
}

/// Pinhole camera aimed at the cube centre
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_aspect(width as f32 / height.max(1) as f32)
    }

    /// Perspective camera looking at the cube from above the front-right corner
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            position: Point3::new(5.0, 5.0, 6.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined projection * view matrix
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a model-space point to screen space.
    ///
    /// `view_projection` comes from [`Camera::view_projection`] so callers
    /// drawing many points compute it once.
    pub fn project_to_screen(
        view_projection: &Matrix4<f32>,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        width: f32,
        height: f32,
    ) -> Option<ScreenPoint> {
        let clip = view_projection * model_matrix * point.to_homogeneous();

        // Points behind the camera or at the eye have no projection.
        if clip.w < 1e-6 {
            return None;
        }

        let ndc = clip.xyz() / clip.w;

        // Outside the viewport
        if ndc.x < -1.0 || ndc.x > 1.0 || ndc.y < -1.0 || ndc.y > 1.0 {
            return None;
        }

        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * width,
            y: (1.0 - ndc.y) * 0.5 * height,
            depth: ndc.z,
        })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
