/// Geometry primitives for drawing cubelets
use nalgebra::{Point3, Vector3};

use crate::sticker::Face;

/// Edge length of one cubelet body (leaves a thin gap on a unit lattice)
pub const CUBELET_SIZE: f32 = 0.98;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }
}

/// A triangle belonging to one sticker face
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub face: Face,
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex, face: Face) -> Self {
        Self {
            vertices: [v0, v1, v2],
            face,
        }
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Axis-aligned cube centred on the origin, two counter-clockwise
    /// triangles per face, each tagged with the face it belongs to
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::with_capacity(12);

        for face in Face::ALL {
            let n = face.normal().map(|v| v as f32);
            // Two in-plane axes (u, v) with u x v = n keep the winding outward.
            let u = if n.x != 0.0 {
                Vector3::new(0.0, 0.0, -n.x)
            } else if n.y != 0.0 {
                Vector3::new(n.y, 0.0, 0.0)
            } else {
                Vector3::new(n.z, 0.0, 0.0)
            };
            let v = n.cross(&u);
            let corner = |su: f32, sv: f32| {
                let p = (n + u * su + v * sv) * half;
                Vertex::new(p.x, p.y, p.z, n.x, n.y, n.z)
            };

            let (a, b, c, d) = (
                corner(-1.0, -1.0),
                corner(1.0, -1.0),
                corner(1.0, 1.0),
                corner(-1.0, 1.0),
            );
            mesh.add_triangle(Triangle::new(a, b, c, face));
            mesh.add_triangle(Triangle::new(a, c, d, face));
        }

        mesh
    }

    /// Mesh of a single cubelet body
    pub fn cubelet() -> Self {
        Self::cube(CUBELET_SIZE)
    }
}
