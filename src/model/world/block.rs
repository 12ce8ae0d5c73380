use std::fmt;

use glam::Vec3;

use crate::model::Aabb;

/// Template for placeable blocks. Sizes are full edge lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockType {
    pub name: String,
    pub size: Vec3,
}

impl BlockType {
    pub fn new(name: impl Into<String>, size: Vec3) -> Self {
        debug_assert!(size.cmpgt(Vec3::ZERO).all(), "block sizes must be positive");
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn unit_cube() -> Self {
        Self::new("Cube 1m", Vec3::ONE)
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}

impl Default for BlockType {
    fn default() -> Self {
        Self::unit_cube()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = |v: f32| (v * 10.0).round() / 10.0;
        write!(
            f,
            "{}  [{:.1} x {:.1} x {:.1}]",
            self.name,
            r(self.size.x),
            r(self.size.y),
            r(self.size.z)
        )
    }
}

/// A block placed in the world
#[derive(Clone, Debug, PartialEq)]
pub struct BlockInstance {
    pub block_type: BlockType,
    pub center: Vec3,
}

impl BlockInstance {
    pub fn new(block_type: BlockType, center: Vec3) -> Self {
        Self { block_type, center }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.block_type.half_extents())
    }
}
