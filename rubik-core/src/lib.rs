/// Rubik Core Library - Cube rotation engine and shared geometry
///
/// This library keeps the discrete state of a 3x3x3 cube, classifies pointer
/// drags into layer turns, animates each turn as a transient group rotation
/// and commits it back onto the lattice. It also carries the camera and mesh
/// helpers the hosts use to draw the cube.

pub mod animator;
pub mod commit;
pub mod config;
pub mod engine;
pub mod error;
pub mod follower;
pub mod geometry;
pub mod gesture;
pub mod lattice;
pub mod layer;
pub mod projection;
pub mod registry;
pub mod sticker;
pub mod transform;
pub mod tween;

// Re-export commonly used types
pub use animator::{Turn, TurnAnimator};
pub use commit::TurnCommitted;
pub use config::EngineConfig;
pub use engine::{CubeEngine, TurnStarted, TurnState};
pub use error::{ConfigError, GestureRejected};
pub use follower::{OrientationTarget, Viewport};
pub use geometry::{Mesh, Triangle, Vertex};
pub use lattice::{Axis, Direction, GridPos, Orientation};
pub use projection::{Camera, ScreenPoint};
pub use registry::{Cubelet, CubeletId, CubeletRegistry};
pub use sticker::Face;
pub use transform::{CubeOrientation, Transform};
pub use tween::Easing;
