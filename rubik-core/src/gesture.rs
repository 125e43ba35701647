/// Classification of pointer drags into layer turns
use nalgebra::{Point2, Vector2};

use crate::error::GestureRejected;
use crate::lattice::{Axis, Direction};

/// A completed drag in screen coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

impl DragGesture {
    pub fn new(start: Point2<f32>, end: Point2<f32>) -> Self {
        Self { start, end }
    }

    pub fn delta(&self) -> Vector2<f32> {
        self.end - self.start
    }

    /// |dx| + |dy|
    pub fn manhattan_length(&self) -> f32 {
        self.delta().abs().sum()
    }
}

/// Turn axis and direction derived from a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub axis: Axis,
    pub direction: Direction,
}

/// Horizontal drags spin a layer about Y, vertical ones about X.
///
/// Only the two screen-visible axes are produced; depth turns are never
/// classified from a drag.
pub fn classify(drag: &DragGesture, threshold: f32) -> Result<Classified, GestureRejected> {
    let distance = drag.manhattan_length();
    if distance < threshold {
        return Err(GestureRejected::BelowThreshold {
            distance,
            threshold,
        });
    }

    let delta = drag.delta();
    let (axis, component) = if delta.x.abs() > delta.y.abs() {
        (Axis::Y, delta.x)
    } else {
        (Axis::X, delta.y)
    };
    let direction = Direction::from_sign(component).ok_or(GestureRejected::BelowThreshold {
        distance,
        threshold,
    })?;

    Ok(Classified { axis, direction })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(x0: f32, y0: f32, x1: f32, y1: f32) -> DragGesture {
        DragGesture::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn test_vertical_drag_turns_about_x() {
        let classified = classify(&drag(100.0, 100.0, 100.0, 40.0), 10.0).expect("turn");
        assert_eq!(classified.axis, Axis::X);
        assert_eq!(classified.direction, Direction::Negative);
    }

    #[test]
    fn test_horizontal_drag_turns_about_y() {
        let classified = classify(&drag(10.0, 10.0, 60.0, 20.0), 10.0).expect("turn");
        assert_eq!(classified.axis, Axis::Y);
        assert_eq!(classified.direction, Direction::Positive);
    }

    #[test]
    fn test_diagonal_tie_prefers_x() {
        let classified = classify(&drag(0.0, 0.0, -20.0, 20.0), 10.0).expect("turn");
        assert_eq!(classified.axis, Axis::X);
        assert_eq!(classified.direction, Direction::Positive);
    }

    #[test]
    fn test_small_drag_is_not_a_turn() {
        let result = classify(&drag(100.0, 100.0, 104.0, 103.0), 10.0);
        assert_eq!(
            result,
            Err(GestureRejected::BelowThreshold {
                distance: 7.0,
                threshold: 10.0
            })
        );
    }

    #[test]
    fn test_zero_drag_never_turns() {
        assert!(classify(&drag(5.0, 5.0, 5.0, 5.0), 0.0).is_err());
    }
}
