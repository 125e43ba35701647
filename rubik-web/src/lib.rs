/// Rubik Web - WASM facade over the cube rotation engine
///
/// The host page owns the scene, picking and the frame loop. It forwards
/// pointer events and frame deltas here and reads back per-cubelet matrices
/// to draw with.
///
/// ```js
/// const cube = new WebCube();
/// canvas.onpointerdown = (e) => cube.pointer_down(e.clientX, e.clientY, pickId(e));
/// canvas.onpointerup = (e) => cube.pointer_up(e.clientX, e.clientY);
/// canvas.onpointermove = (e) => cube.pointer_move(e.clientX, e.clientY, innerWidth, innerHeight);
/// // each frame
/// cube.tick(dt);
/// const matrices = cube.cubelet_matrices(); // 27 column-major 4x4 matrices
/// ```
use nalgebra::Matrix4;
use rubik_core::{CubeEngine, CubeletId, EngineConfig, Viewport};
use tracing::info;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WebCube {
    engine: CubeEngine,
}

#[wasm_bindgen]
impl WebCube {
    /// Create a solved cube, optionally configured from a TOML string
    #[wasm_bindgen(constructor)]
    pub fn new(config_toml: Option<String>) -> Result<WebCube, JsValue> {
        let config = match config_toml {
            Some(raw) => EngineConfig::from_toml_str(&raw)
                .map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => EngineConfig::default(),
        };
        Ok(WebCube {
            engine: CubeEngine::new(config),
        })
    }

    /// Start a drag. `picked` is the id of the cubelet under the pointer.
    pub fn pointer_down(&mut self, x: f32, y: f32, picked: Option<u32>) {
        self.engine.pointer_down(x, y, picked.map(CubeletId::new));
    }

    /// Finish a drag. Returns whether a layer turn started.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_up(x, y).is_ok()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.engine.pointer_move(x, y, Viewport::new(width, height));
    }

    /// Advance one frame. Returns whether a turn was committed.
    pub fn tick(&mut self, dt_secs: f32) -> bool {
        let dt = std::time::Duration::try_from_secs_f32(dt_secs).unwrap_or_default();
        match self.engine.tick(dt) {
            Some(committed) => {
                info!(axis = %committed.axis, layer = committed.layer_value, "turn committed");
                true
            }
            None => false,
        }
    }

    pub fn is_turning(&self) -> bool {
        self.engine.is_turning()
    }

    pub fn cubelet_count(&self) -> usize {
        self.engine.registry().len()
    }

    /// Lattice position of a cubelet as [x, y, z], empty for unknown ids
    pub fn cubelet_position(&self, id: u32) -> Vec<i32> {
        self.engine
            .registry()
            .get(CubeletId::new(id))
            .map(|c| c.position().iter().copied().collect())
            .unwrap_or_default()
    }

    /// Live model matrices of every cubelet in id order, column-major
    pub fn cubelet_matrices(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.engine.registry().len() * 16);
        for cubelet in self.engine.registry().iter() {
            push_matrix(&mut out, &self.engine.cubelet_transform(cubelet));
        }
        out
    }

    /// Whole-cube orientation as [pitch, yaw] in radians
    pub fn cube_rotation(&self) -> Vec<f32> {
        let orientation = self.engine.orientation();
        vec![orientation.pitch, orientation.yaw]
    }
}

fn push_matrix(out: &mut Vec<f32>, matrix: &Matrix4<f32>) {
    out.extend_from_slice(matrix.as_slice());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Log panics using `console.error`.
    console_error_panic_hook::set_once();

    // Redirect tracing to console.log and friends.
    tracing_wasm::set_as_global_default();
}
