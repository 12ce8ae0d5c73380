use glam::Vec3;
use tracing::debug;

use super::block::{BlockInstance, BlockType};
use crate::model::placement::placement_center;
use crate::model::{Aabb, Hit, Ray};

/// The ground slab the sandbox starts with: 2000 units wide, top face at y = 0.5
pub fn default_ground() -> Aabb {
    Aabb::new(
        Vec3::new(-1000.0, -1.0, -1000.0),
        Vec3::new(1000.0, 0.5, 1000.0),
    )
}

/// Placed blocks in insertion order, plus the fixed ground slab.
///
/// Blocks are only ever appended; nothing is removed or replaced.
pub struct World {
    ground: Aabb,
    blocks: Vec<BlockInstance>,
    epsilon: f32,
}

impl World {
    pub fn new(ground: Aabb, epsilon: f32) -> Self {
        Self {
            ground,
            blocks: Vec::new(),
            epsilon,
        }
    }

    pub fn ground(&self) -> &Aabb {
        &self.ground
    }

    pub fn blocks(&self) -> &[BlockInstance] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Closest hit with `t > epsilon` over the ground and every block.
    ///
    /// On equal `t` the ground wins, then blocks in insertion order.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        let ground = ray.intersect_aabb(&self.ground, self.epsilon);
        let blocks = self
            .blocks
            .iter()
            .filter_map(|b| ray.intersect_aabb(&b.aabb(), self.epsilon));

        ground
            .into_iter()
            .chain(blocks)
            .filter(|h| h.t > self.epsilon)
            .fold(None, |best: Option<Hit>, h| match best {
                Some(b) if b.t <= h.t => Some(b),
                _ => Some(h),
            })
    }

    /// Append a block of `block_type` resting on the surface of `hit`
    pub fn place(&mut self, block_type: &BlockType, hit: &Hit) -> &BlockInstance {
        let center = placement_center(hit, block_type.half_extents(), self.epsilon);
        debug!(
            "placing {} at ({:.3}, {:.3}, {:.3}) on normal {:?}",
            block_type.name, center.x, center.y, center.z, hit.normal
        );
        self.blocks.push(BlockInstance::new(block_type.clone(), center));
        &self.blocks[self.blocks.len() - 1]
    }

    /// Cast `ray` and place a block on whatever it lands on first.
    /// Returns `None`, leaving the world untouched, when nothing is targeted.
    pub fn place_at(&mut self, block_type: &BlockType, ray: &Ray) -> Option<&BlockInstance> {
        match self.nearest_hit(ray) {
            Some(hit) => Some(self.place(block_type, &hit)),
            None => {
                debug!("no placement target along {:?}", ray.direction);
                None
            }
        }
    }
}
