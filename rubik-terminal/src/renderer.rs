/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Vector3};
use rubik_core::{Camera, CubeletId, Face, Mesh, ScreenPoint, Triangle};
use std::io::Write;

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Share of a face's brightness that does not depend on the light direction
const AMBIENT: f32 = 0.35;

/// ASCII renderer that rasterizes cubelets with a depth buffer and keeps a
/// per-cell cubelet id buffer for picking
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
    id_buffer: Vec<Option<CubeletId>>,
    light_dir: Vector3<f32>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
            id_buffer: vec![None; size],
            light_dir: Vector3::new(5.0, 10.0, 7.0).normalize(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
        self.id_buffer.fill(None);
    }

    /// Rasterize one cubelet's mesh with its live model matrix
    pub fn render_cubelet(
        &mut self,
        mesh: &Mesh,
        model_matrix: &Matrix4<f32>,
        view_projection: &Matrix4<f32>,
        cubelet: CubeletId,
    ) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model_matrix, view_projection, cubelet);
        }
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        model_matrix: &Matrix4<f32>,
        view_projection: &Matrix4<f32>,
        cubelet: CubeletId,
    ) {
        // Project vertices to screen space
        let mut screen_coords = Vec::with_capacity(3);
        for vertex in &triangle.vertices {
            match Camera::project_to_screen(
                view_projection,
                &vertex.position,
                model_matrix,
                self.width as f32,
                self.height as f32,
            ) {
                Some(point) => screen_coords.push(point),
                None => return, // Triangle is clipped
            }
        }

        // Shade with the face normal in world space
        let normal = model_matrix.transform_vector(&triangle.calculate_normal());
        let diffuse = normal.normalize().dot(&self.light_dir).max(0.0);
        let brightness = (AMBIENT + (1.0 - AMBIENT) * diffuse).min(1.0);

        // Map brightness to character
        let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
        let char_index = char_index.min(LUMINOSITY_RAMP.len() - 1);
        let character = LUMINOSITY_RAMP[char_index];

        let color = shade(triangle.face, brightness);
        self.rasterize_triangle(&screen_coords, character, color, cubelet);
    }

    fn rasterize_triangle(
        &mut self,
        coords: &[ScreenPoint],
        character: char,
        color: Color,
        cubelet: CubeletId,
    ) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.x.min(v1.x).min(v2.x).floor() as i32;
        let max_x = v0.x.max(v1.x).max(v2.x).ceil() as i32;
        let min_y = v0.y.min(v1.y).min(v2.y).floor() as i32;
        let max_y = v0.y.max(v1.y).max(v2.y).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) =
                    barycentric((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.depth + w1 * v1.depth + w2 * v2.depth;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.char_buffer[idx] = character;
                            self.color_buffer[idx] = color;
                            self.id_buffer[idx] = Some(cubelet);
                        }
                    }
                }
            }
        }
    }

    /// Cubelet drawn nearest to the viewer at a cell, if any
    pub fn pick(&self, column: u16, row: u16) -> Option<CubeletId> {
        let (x, y) = (column as usize, row as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.id_buffer[y * self.width + x]
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Sticker colour dimmed by `brightness`
fn shade(face: Face, brightness: f32) -> Color {
    let (r, g, b) = face.rgb();
    let scale = |c: u8| (c as f32 * brightness).round() as u8;
    Color::Rgb {
        r: scale(r),
        g: scale(g),
        b: scale(b),
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
