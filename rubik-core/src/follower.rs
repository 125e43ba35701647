/// Idle whole-cube orientation that eases towards the pointer
use tracing::trace;

use crate::engine::TurnState;
use crate::transform::CubeOrientation;

/// Visible area the pointer moves over, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pointer-derived orientation the cube steers towards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationTarget {
    pub pitch: f32,
    pub yaw: f32,
}

impl OrientationTarget {
    /// Map a pointer position to a target. The viewport centre is the rest
    /// pose; each edge is `sensitivity` radians away. Returns `None` for a
    /// degenerate viewport.
    pub fn from_pointer(x: f32, y: f32, viewport: Viewport, sensitivity: f32) -> Option<Self> {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        let nx = (x / viewport.width - 0.5) * 2.0;
        let ny = (y / viewport.height - 0.5) * 2.0;
        Some(Self {
            pitch: ny * sensitivity,
            yaw: nx * sensitivity,
        })
    }
}

/// One damped step towards `target`. Does nothing while a turn is active.
///
/// Returns whether the orientation changed.
pub fn follow(
    state: &TurnState,
    current: &mut CubeOrientation,
    target: &OrientationTarget,
    damping: f32,
) -> bool {
    if state.is_turning() {
        return false;
    }
    let before = *current;
    current.approach(target.pitch, target.yaw, damping);
    if *current == before {
        return false;
    }
    trace!(pitch = current.pitch, yaw = current.yaw, "idle orientation step");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{Turn, TurnAnimator};
    use crate::lattice::{Axis, Direction};
    use crate::layer::select_layer_at;
    use crate::registry::CubeletRegistry;
    use crate::tween::Easing;
    use std::f32::consts::PI;
    use std::time::Duration;

    #[test]
    fn test_target_from_pointer() {
        let viewport = Viewport::new(800.0, 600.0);
        let centre = OrientationTarget::from_pointer(400.0, 300.0, viewport, PI).expect("target");
        assert!(centre.pitch.abs() < 1e-6 && centre.yaw.abs() < 1e-6);

        let corner = OrientationTarget::from_pointer(800.0, 0.0, viewport, PI).expect("target");
        assert!((corner.yaw - PI).abs() < 1e-6);
        assert!((corner.pitch + PI).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_viewport() {
        assert!(OrientationTarget::from_pointer(1.0, 1.0, Viewport::new(0.0, 10.0), PI).is_none());
    }

    #[test]
    fn test_follow_eases_towards_target() {
        let target = OrientationTarget { pitch: 1.0, yaw: 2.0 };
        let mut current = CubeOrientation::default();
        assert!(follow(&TurnState::Idle, &mut current, &target, 0.05));
        assert!((current.pitch - 0.05).abs() < 1e-6);
        assert!((current.yaw - 0.1).abs() < 1e-6);

        for _ in 0..500 {
            follow(&TurnState::Idle, &mut current, &target, 0.05);
        }
        assert!((current.yaw - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_follow_reports_no_motion() {
        let target = OrientationTarget { pitch: 0.5, yaw: -0.5 };
        let mut current = CubeOrientation::new(0.5, -0.5);
        assert!(!follow(&TurnState::Idle, &mut current, &target, 0.05));
        assert_eq!(current, CubeOrientation::new(0.5, -0.5));

        let mut moving = CubeOrientation::default();
        let layer = select_layer_at(&CubeletRegistry::solved(), Axis::X, 0);
        let turning = TurnState::Turning(TurnAnimator::start(
            Turn::new(layer, Direction::Positive),
            Duration::from_millis(400),
            Easing::default(),
        ));
        assert!(!follow(&turning, &mut moving, &target, 0.05));
        assert_eq!(moving, CubeOrientation::default());
    }
}
