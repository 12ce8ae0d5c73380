use glam::Vec3;

use super::math::AbsDot;
use super::ray::Hit;

/// Centre for a new block of `half_extents` so that its face lies on the
/// surface `hit` landed on.
///
/// The hit point is pushed out along the face normal by the block's half size
/// on that axis, plus `10 * epsilon` so the new face is not coplanar with the
/// one it rests on. Existing blocks are not consulted; overlaps are allowed.
pub fn placement_center(hit: &Hit, half_extents: Vec3, epsilon: f32) -> Vec3 {
    let n = hit.normal;
    hit.point + n * half_extents.abs_dot(n) + n * (epsilon * 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_top_face_placement() {
        let hit = Hit {
            t: 3.0,
            point: Vec3::new(0.3, 2.0, -0.7),
            normal: Vec3::Y,
        };
        let c = placement_center(&hit, Vec3::splat(0.5), EPS);
        assert_eq!(c.x, 0.3);
        assert_eq!(c.z, -0.7);
        assert!((c.y - (2.0 + 0.5 + 10.0 * EPS)).abs() < 1e-6, "y = {}", c.y);
    }

    #[test]
    fn test_side_face_uses_extent_on_that_axis() {
        let hit = Hit {
            t: 1.0,
            point: Vec3::new(-1.0, 0.5, 0.0),
            normal: Vec3::NEG_X,
        };
        let c = placement_center(&hit, Vec3::new(2.0, 0.25, 0.5), EPS);
        assert!(c.abs_diff_eq(Vec3::new(-3.0 - 10.0 * EPS, 0.5, 0.0), 1e-6), "got {c:?}");
    }
}
