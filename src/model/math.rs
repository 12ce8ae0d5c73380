use glam::{Quat, Vec3};

/// Sum of the absolute per-axis products.
///
/// With an axis-aligned unit `n` this picks out the extent of `self` along
/// that axis, which is how far a box has to be pushed to sit flush on a face.
pub trait AbsDot {
    fn abs_dot(self, n: Vec3) -> f32;
}

impl AbsDot for Vec3 {
    fn abs_dot(self, n: Vec3) -> f32 {
        (self.x * n.x).abs() + (self.y * n.y).abs() + (self.z * n.z).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Rotation of `degrees` about one of the coordinate axes
pub fn rotation(axis: Axis, degrees: f32) -> Quat {
    Quat::from_axis_angle(axis.unit(), degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_dot_projects_extent_on_axis() {
        let half = Vec3::new(0.5, 1.5, 2.5);
        assert_eq!(half.abs_dot(Vec3::Y), 1.5);
        assert_eq!(half.abs_dot(Vec3::NEG_Z), 2.5);
        assert_eq!(half.abs_dot(Vec3::NEG_X), 0.5);
    }

    #[test]
    fn test_rotation_about_y() {
        let q = rotation(Axis::Y, 90.0);
        let v = q * Vec3::X;
        assert!(v.abs_diff_eq(Vec3::NEG_Z, 1e-6), "got {v:?}");
    }
}
