/// Coloured faces carried by every cubelet
use crate::lattice::GridPos;

/// One of the six sticker faces, named by the direction it faces when solved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    /// Outward normal in the cubelet's own frame
    pub fn normal(self) -> GridPos {
        match self {
            Face::Front => GridPos::new(0, 0, 1),
            Face::Back => GridPos::new(0, 0, -1),
            Face::Right => GridPos::new(1, 0, 0),
            Face::Left => GridPos::new(-1, 0, 0),
            Face::Top => GridPos::new(0, 1, 0),
            Face::Bottom => GridPos::new(0, -1, 0),
        }
    }

    pub fn from_normal(normal: &GridPos) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.normal() == *normal)
    }

    /// Sticker colour as 0xRRGGBB
    pub fn color(self) -> u32 {
        match self {
            Face::Front => 0x00ff00,
            Face::Back => 0x0000ff,
            Face::Right => 0xff0000,
            Face::Left => 0xffa500,
            Face::Top => 0xffffff,
            Face::Bottom => 0xffff00,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        let c = self.color();
        ((c >> 16) as u8, (c >> 8) as u8, c as u8)
    }
}
