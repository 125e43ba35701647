/// Baking a finished turn back into discrete lattice state
use nalgebra::Rotation3;
use tracing::debug;

use crate::animator::Turn;
use crate::lattice::{Axis, Direction, GridPos, Orientation};
use crate::registry::{CubeletId, CubeletRegistry};

/// Record of a turn whose effects are now permanent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnCommitted {
    pub axis: Axis,
    pub layer_value: i32,
    pub direction: Direction,
    pub members: Vec<CubeletId>,
}

/// Compose the group rotation with a member's pre-turn placement and snap
/// the result back onto the lattice.
///
/// Rounding is mandatory: the interpolated angle carries float error, and
/// positions must stay in {-1, 0, 1}.
pub fn bake(
    position: &GridPos,
    orientation: &Orientation,
    group_rotation: &Rotation3<f32>,
) -> (GridPos, Orientation) {
    let moved = group_rotation * position.map(|c| c as f32);
    let position = moved.map(|c| (c.round() as i32).clamp(-1, 1));
    let basis = group_rotation.matrix() * orientation.to_f32();
    (position, Orientation::from_rotation_rounded(&basis))
}

/// Re-express every member of a finished turn in the cube frame
pub(crate) fn commit_turn(registry: &mut CubeletRegistry, turn: &Turn) -> TurnCommitted {
    let group_rotation = turn.group_rotation();
    for &id in turn.members() {
        let Some(cubelet) = registry.get(id) else {
            continue;
        };
        let (position, orientation) =
            bake(cubelet.position(), cubelet.orientation(), &group_rotation);
        registry.place(id, position, orientation);
    }

    debug!(
        axis = %turn.axis(),
        layer = turn.layer_value(),
        direction = turn.direction().sign(),
        members = turn.members().len(),
        "committed turn"
    );

    TurnCommitted {
        axis: turn.axis(),
        layer_value: turn.layer_value(),
        direction: turn.direction(),
        members: turn.members().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bake_quarter_turn_about_x() {
        let rotation = Rotation3::from_axis_angle(&Axis::X.unit_axis(), -std::f32::consts::FRAC_PI_2);
        let (position, orientation) =
            bake(&GridPos::new(1, 1, 0), &Orientation::identity(), &rotation);
        assert_eq!(position, GridPos::new(1, 0, -1));
        assert_eq!(orientation, Orientation::quarter_turn(Axis::X, Direction::Negative));
    }

    #[test]
    fn test_bake_absorbs_drift() {
        let drifted = Rotation3::from_axis_angle(&Axis::Y.unit_axis(), 1.5707 + 0.003);
        let (position, orientation) =
            bake(&GridPos::new(1, -1, 1), &Orientation::identity(), &drifted);
        assert_eq!(position, GridPos::new(1, -1, -1));
        assert_eq!(orientation, Orientation::quarter_turn(Axis::Y, Direction::Positive));
    }

    #[test]
    fn test_bake_composes_with_existing_orientation() {
        let start = Orientation::quarter_turn(Axis::Z, Direction::Positive);
        let rotation = Rotation3::from_axis_angle(&Axis::X.unit_axis(), std::f32::consts::FRAC_PI_2);
        let (_, orientation) = bake(&GridPos::new(0, 0, 1), &start, &rotation);
        assert_eq!(
            orientation,
            start.then(&Orientation::quarter_turn(Axis::X, Direction::Positive))
        );
        assert!(orientation.is_proper());
    }
}
