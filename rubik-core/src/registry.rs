/// The 27 cubelets and their current lattice placement
use std::collections::HashSet;
use std::fmt;

use crate::lattice::{Axis, GridPos, Orientation};
use crate::sticker::Face;

/// Number of cubelets in a 3x3x3 cube
pub const CUBELET_COUNT: usize = 27;

/// Stable identity of a cubelet, assigned once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeletId(u32);

impl CubeletId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CubeletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One unit cube of the puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubelet {
    id: CubeletId,
    position: GridPos,
    orientation: Orientation,
}

impl Cubelet {
    pub fn id(&self) -> CubeletId {
        self.id
    }

    pub fn position(&self) -> &GridPos {
        &self.position
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Which sticker currently faces the given lattice direction
    pub fn face_towards(&self, direction: &GridPos) -> Option<Face> {
        Face::from_normal(&self.orientation.inverse().rotate(direction))
    }
}

/// Sole long-term owner of the cubelets.
///
/// Population is fixed at construction; only the turn committer may move
/// cubelets, through [`CubeletRegistry::place`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeletRegistry {
    cubelets: Vec<Cubelet>,
}

impl CubeletRegistry {
    /// Build the solved cube, ids assigned in x-major, then y, then z order
    pub fn solved() -> Self {
        let mut cubelets = Vec::with_capacity(CUBELET_COUNT);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    cubelets.push(Cubelet {
                        id: CubeletId(cubelets.len() as u32),
                        position: GridPos::new(x, y, z),
                        orientation: Orientation::identity(),
                    });
                }
            }
        }
        Self { cubelets }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cubelet> {
        self.cubelets.iter()
    }

    pub fn len(&self) -> usize {
        self.cubelets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubelets.is_empty()
    }

    pub fn get(&self, id: CubeletId) -> Option<&Cubelet> {
        self.cubelets.get(id.index())
    }

    /// Cubelet currently occupying a lattice point
    pub fn at(&self, position: &GridPos) -> Option<&Cubelet> {
        self.cubelets.iter().find(|c| c.position == *position)
    }

    /// Cubelets whose `axis` component equals `value`
    pub fn with_component(&self, axis: Axis, value: i32) -> impl Iterator<Item = &Cubelet> {
        self.cubelets
            .iter()
            .filter(move |c| axis.component(&c.position) == value)
    }

    /// Whether the cubelets occupy every point of {-1,0,1}³ exactly once
    pub fn is_lattice_bijection(&self) -> bool {
        let in_range = self
            .cubelets
            .iter()
            .all(|c| c.position.iter().all(|v| (-1..=1).contains(v)));
        let distinct: HashSet<GridPos> = self.cubelets.iter().map(|c| c.position).collect();
        in_range && self.cubelets.len() == CUBELET_COUNT && distinct.len() == CUBELET_COUNT
    }

    pub(crate) fn place(&mut self, id: CubeletId, position: GridPos, orientation: Orientation) {
        if let Some(cubelet) = self.cubelets.get_mut(id.index()) {
            cubelet.position = position;
            cubelet.orientation = orientation;
        }
    }
}

impl Default for CubeletRegistry {
    fn default() -> Self {
        Self::solved()
    }
}
