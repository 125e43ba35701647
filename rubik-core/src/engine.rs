/// Cube rotation engine: gesture intake, turn state machine and frame ticks
use nalgebra::{Matrix4, Point2};
use std::time::Duration;
use tracing::debug;

use crate::animator::{AnimationStep, Turn, TurnAnimator};
use crate::commit::{commit_turn, TurnCommitted};
use crate::config::EngineConfig;
use crate::error::GestureRejected;
use crate::follower::{follow, OrientationTarget, Viewport};
use crate::gesture::{classify, DragGesture};
use crate::lattice::{Axis, Direction};
use crate::layer::{select_layer, select_layer_at, Layer};
use crate::registry::{Cubelet, CubeletId, CubeletRegistry};
use crate::transform::{CubeOrientation, Transform};

/// Whether a turn owns the cube. At most one turn exists at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Turning(TurnAnimator),
}

impl TurnState {
    pub fn is_turning(&self) -> bool {
        matches!(self, TurnState::Turning(_))
    }

    pub fn turn(&self) -> Option<&Turn> {
        match self {
            TurnState::Idle => None,
            TurnState::Turning(animator) => Some(animator.turn()),
        }
    }
}

/// Summary of a turn that has just started animating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnStarted {
    pub axis: Axis,
    pub layer_value: i32,
    pub direction: Direction,
    pub member_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    point: Point2<f32>,
    picked: Option<CubeletId>,
}

/// Owns the registry and drives every turn from gesture to commit
#[derive(Debug, Clone)]
pub struct CubeEngine {
    config: EngineConfig,
    registry: CubeletRegistry,
    state: TurnState,
    drag: Option<DragStart>,
    orientation: CubeOrientation,
    target: OrientationTarget,
}

impl CubeEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            registry: CubeletRegistry::solved(),
            state: TurnState::Idle,
            drag: None,
            orientation: CubeOrientation::default(),
            target: OrientationTarget::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &CubeletRegistry {
        &self.registry
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn is_turning(&self) -> bool {
        self.state.is_turning()
    }

    pub fn active_turn(&self) -> Option<&Turn> {
        self.state.turn()
    }

    pub fn orientation(&self) -> &CubeOrientation {
        &self.orientation
    }

    pub fn target(&self) -> &OrientationTarget {
        &self.target
    }

    /// Record the start of a drag. Ignored while a turn is in progress.
    pub fn pointer_down(&mut self, x: f32, y: f32, picked: Option<CubeletId>) {
        if self.state.is_turning() {
            return;
        }
        self.drag = Some(DragStart {
            point: Point2::new(x, y),
            picked,
        });
    }

    /// Finish a drag and start the turn it describes, if any
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Result<TurnStarted, GestureRejected> {
        let result = self.complete_drag(Point2::new(x, y));
        if let Err(reason) = &result {
            debug!(%reason, "gesture discarded");
        }
        result
    }

    fn complete_drag(&mut self, end: Point2<f32>) -> Result<TurnStarted, GestureRejected> {
        let start = self.drag.take().ok_or(GestureRejected::NoDragInProgress)?;
        if self.state.is_turning() {
            return Err(GestureRejected::Busy);
        }
        let classified = classify(
            &DragGesture::new(start.point, end),
            self.config.drag_threshold,
        )?;
        let layer = select_layer(&self.registry, start.picked, classified.axis)?;
        self.begin(layer, classified.direction)
    }

    /// Update the idle orientation target from the pointer position
    pub fn pointer_move(&mut self, x: f32, y: f32, viewport: Viewport) {
        if let Some(target) =
            OrientationTarget::from_pointer(x, y, viewport, self.config.pointer_sensitivity)
        {
            self.target = target;
        }
    }

    /// Start a turn of the layer at `axis = layer_value` without a gesture
    pub fn start_turn(
        &mut self,
        axis: Axis,
        layer_value: i32,
        direction: Direction,
    ) -> Result<TurnStarted, GestureRejected> {
        if self.state.is_turning() {
            return Err(GestureRejected::Busy);
        }
        let layer = select_layer_at(&self.registry, axis, layer_value);
        if layer.is_empty() {
            return Err(GestureRejected::EmptyLayer {
                axis,
                value: layer_value,
            });
        }
        self.begin(layer, direction)
    }

    fn begin(&mut self, layer: Layer, direction: Direction) -> Result<TurnStarted, GestureRejected> {
        if self.state.is_turning() {
            return Err(GestureRejected::Busy);
        }
        let started = TurnStarted {
            axis: layer.axis(),
            layer_value: layer.value(),
            direction,
            member_count: layer.len(),
        };
        let turn = Turn::new(layer, direction);
        self.state = TurnState::Turning(TurnAnimator::start(
            turn,
            self.config.turn_duration(),
            self.config.easing,
        ));
        debug!(
            axis = %started.axis,
            layer = started.layer_value,
            direction = direction.sign(),
            members = started.member_count,
            "turn started"
        );
        Ok(started)
    }

    /// Advance one frame.
    ///
    /// While idle this steps the orientation follower; while turning it
    /// advances the animation and, once the quarter turn is reached, commits
    /// it. The state returns to idle only after every member is re-placed.
    pub fn tick(&mut self, dt: Duration) -> Option<TurnCommitted> {
        if !self.state.is_turning() {
            follow(
                &self.state,
                &mut self.orientation,
                &self.target,
                self.config.follow_damping,
            );
            return None;
        }

        let step = match &mut self.state {
            TurnState::Turning(animator) => animator.advance(dt),
            TurnState::Idle => return None,
        };
        if step == AnimationStep::Running {
            return None;
        }

        let committed = match &self.state {
            TurnState::Turning(animator) => commit_turn(&mut self.registry, animator.turn()),
            TurnState::Idle => return None,
        };
        self.state = TurnState::Idle;
        Some(committed)
    }

    /// Whole-cube model matrix
    pub fn cube_transform(&self) -> Matrix4<f32> {
        Transform::rotation_matrix(&self.orientation)
    }

    /// Live model matrix of a cubelet, including any in-flight group rotation
    pub fn cubelet_transform(&self, cubelet: &Cubelet) -> Matrix4<f32> {
        let local = Transform::cubelet_matrix(cubelet.position(), cubelet.orientation());
        let group = match self.state.turn() {
            Some(turn) if turn.contains(cubelet.id()) => turn.group_rotation().to_homogeneous(),
            _ => Matrix4::identity(),
        };
        self.cube_transform() * group * local
    }
}

impl Default for CubeEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
