use glam::Vec3;

use super::aabb::Aabb;
use super::math::Axis;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Where a ray enters a box: distance along the ray, world point and the
/// outward normal of the entry face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

impl Ray {
    /// Direction is taken as given, not normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Unit ray for a yaw/pitch pair in degrees. Yaw 0 looks down -Z,
    /// positive yaw turns towards +X, positive pitch looks up.
    pub fn from_angles(origin: Vec3, yaw_deg: f32, pitch_deg: f32) -> Self {
        let (sy, cy) = yaw_deg.to_radians().sin_cos();
        let (sp, cp) = pitch_deg.to_radians().sin_cos();
        let direction = Vec3::new(sy * cp, sp, -cy * cp).normalize();
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test against `aabb`.
    ///
    /// Axes are walked X, Y, Z; on an exact tie the earlier axis keeps the
    /// normal. Direction components under `epsilon` are treated as parallel
    /// to that slab. A box that starts behind the origin (entry `t < 0`,
    /// which includes an origin inside the box) is not a hit.
    pub fn intersect_aabb(&self, aabb: &Aabb, epsilon: f32) -> Option<Hit> {
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in Axis::ALL {
            let i = axis.index();
            let o = self.origin[i];
            let d = self.direction[i];
            let (lo, hi) = (aabb.min[i], aabb.max[i]);

            if d.abs() < epsilon {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let t1 = (lo - o) * inv;
            let t2 = (hi - o) * inv;
            let t_enter = t1.min(t2);
            let t_exit = t1.max(t2);

            if t_enter > tmin {
                tmin = t_enter;
                let sign = if t1 > t2 { 1.0 } else { -1.0 };
                normal = axis.unit() * sign;
            }
            tmax = tmax.min(t_exit);
            if tmin > tmax {
                return None;
            }
        }

        // behind the camera
        if tmin < 0.0 {
            return None;
        }

        Some(Hit {
            t: tmin,
            point: self.at(tmin),
            normal,
        })
    }
}
