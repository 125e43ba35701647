/// Turn animation: a transient rotation group swept from 0 to a quarter turn
use nalgebra::Rotation3;
use std::time::Duration;

use crate::lattice::{Axis, Direction};
use crate::layer::Layer;
use crate::registry::CubeletId;
use crate::tween::{Easing, Tween};

/// One in-progress face rotation.
///
/// `members` is captured at turn start and stays fixed until commit;
/// `progress_angle` is the group's own transform and is the only thing the
/// animation mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    axis: Axis,
    layer_value: i32,
    direction: Direction,
    progress_angle: f32,
    members: Vec<CubeletId>,
}

impl Turn {
    pub fn new(layer: Layer, direction: Direction) -> Self {
        let axis = layer.axis();
        let layer_value = layer.value();
        Self {
            axis,
            layer_value,
            direction,
            progress_angle: 0.0,
            members: layer.into_members(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn layer_value(&self) -> i32 {
        self.layer_value
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current signed angle of the group, in radians
    pub fn progress_angle(&self) -> f32 {
        self.progress_angle
    }

    pub fn target_angle(&self) -> f32 {
        self.direction.quarter_angle()
    }

    pub fn members(&self) -> &[CubeletId] {
        &self.members
    }

    pub fn contains(&self, id: CubeletId) -> bool {
        self.members.contains(&id)
    }

    /// Rotation of the transient group at its current angle
    pub fn group_rotation(&self) -> Rotation3<f32> {
        Rotation3::from_axis_angle(&self.axis.unit_axis(), self.progress_angle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    Running,
    Finished,
}

/// Owns the turn for its whole animation
#[derive(Debug, Clone, PartialEq)]
pub struct TurnAnimator {
    turn: Turn,
    tween: Tween,
}

impl TurnAnimator {
    pub fn start(turn: Turn, duration: Duration, easing: Easing) -> Self {
        let tween = Tween::new(0.0, turn.target_angle(), duration, easing);
        Self { turn, tween }
    }

    /// Advance the group angle. Always reaches `Finished`; there is no cancel.
    pub fn advance(&mut self, dt: Duration) -> AnimationStep {
        self.turn.progress_angle = self.tween.advance(dt);
        if self.tween.is_finished() {
            AnimationStep::Finished
        } else {
            AnimationStep::Running
        }
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    /// Normalized animation time in [0, 1]
    pub fn progress(&self) -> f32 {
        self.tween.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::select_layer_at;
    use crate::registry::CubeletRegistry;

    fn animator(direction: Direction) -> TurnAnimator {
        let registry = CubeletRegistry::solved();
        let turn = Turn::new(select_layer_at(&registry, Axis::Y, 1), direction);
        TurnAnimator::start(turn, Duration::from_millis(400), Easing::Power2InOut)
    }

    #[test]
    fn test_turn_starts_at_rest() {
        let animator = animator(Direction::Positive);
        assert_eq!(animator.turn().progress_angle(), 0.0);
        assert_eq!(animator.turn().members().len(), 9);
        assert_eq!(animator.turn().layer_value(), 1);
    }

    #[test]
    fn test_angle_is_monotonic_towards_target() {
        let mut animator = animator(Direction::Negative);
        let mut last = 0.0_f32;
        for _ in 0..9 {
            assert_eq!(animator.advance(Duration::from_millis(40)), AnimationStep::Running);
            let angle = animator.turn().progress_angle();
            assert!(angle <= last);
            last = angle;
        }
        assert_eq!(animator.advance(Duration::from_millis(40)), AnimationStep::Finished);
        assert_eq!(animator.turn().progress_angle(), animator.turn().target_angle());
    }

    #[test]
    fn test_overshooting_frame_finishes() {
        let mut animator = animator(Direction::Positive);
        assert_eq!(animator.advance(Duration::from_secs(5)), AnimationStep::Finished);
        assert_eq!(animator.progress(), 1.0);
    }
}
