/// Layer selection: the nine cubelets sharing one coordinate along an axis
use tracing::warn;

use crate::error::GestureRejected;
use crate::lattice::Axis;
use crate::registry::{CubeletId, CubeletRegistry};

/// A layer snapshot taken at turn start. Never cached across turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    axis: Axis,
    value: i32,
    members: Vec<CubeletId>,
}

impl Layer {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn members(&self) -> &[CubeletId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn into_members(self) -> Vec<CubeletId> {
        self.members
    }
}

/// Select the layer at `axis = value` using exact integer equality
pub fn select_layer_at(registry: &CubeletRegistry, axis: Axis, value: i32) -> Layer {
    Layer {
        axis,
        value,
        members: registry
            .with_component(axis, value)
            .map(|c| c.id())
            .collect(),
    }
}

/// Select the layer through the picked cubelet along `axis`
pub fn select_layer(
    registry: &CubeletRegistry,
    picked: Option<CubeletId>,
    axis: Axis,
) -> Result<Layer, GestureRejected> {
    let id = picked.ok_or(GestureRejected::NoPickTarget)?;
    let Some(reference) = registry.get(id) else {
        warn!(%id, "picked a cubelet handle that is not in the registry");
        return Err(GestureRejected::UnknownCubelet(id));
    };
    let layer = select_layer_at(registry, axis, axis.component(reference.position()));
    if layer.is_empty() {
        return Err(GestureRejected::EmptyLayer {
            axis,
            value: layer.value,
        });
    }
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::GridPos;

    #[test]
    fn test_layer_through_picked_cubelet() {
        let registry = CubeletRegistry::solved();
        let picked = registry.at(&GridPos::new(1, 0, -1)).map(|c| c.id());

        let layer = select_layer(&registry, picked, Axis::X).expect("layer");
        assert_eq!(layer.axis(), Axis::X);
        assert_eq!(layer.value(), 1);
        assert_eq!(layer.len(), 9);
        for id in layer.members() {
            let cubelet = registry.get(*id).expect("member exists");
            assert_eq!(cubelet.position().x, 1);
        }
    }

    #[test]
    fn test_no_pick_target() {
        let registry = CubeletRegistry::solved();
        assert_eq!(
            select_layer(&registry, None, Axis::Y),
            Err(GestureRejected::NoPickTarget)
        );
    }

    #[test]
    fn test_unknown_cubelet() {
        let registry = CubeletRegistry::solved();
        let bogus = CubeletId::new(99);
        assert_eq!(
            select_layer(&registry, Some(bogus), Axis::X),
            Err(GestureRejected::UnknownCubelet(bogus))
        );
    }

    #[test]
    fn test_out_of_range_value_is_empty() {
        let registry = CubeletRegistry::solved();
        assert!(select_layer_at(&registry, Axis::Z, 3).is_empty());
    }
}
