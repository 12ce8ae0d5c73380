use glam::{Mat4, Quat, Vec3};

use super::math::{rotation, Axis};
use super::ray::Ray;

/// Free-fly camera state. Angles are in degrees: yaw 0 looks down -Z and
/// grows towards +X, pitch is positive looking up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Horizontal forward; pitch is ignored so flying stays level
    pub fn forward(&self) -> Vec3 {
        let (s, c) = self.yaw.to_radians().sin_cos();
        Vec3::new(s, 0.0, -c)
    }

    pub fn right(&self) -> Vec3 {
        let (s, c) = self.yaw.to_radians().sin_cos();
        Vec3::new(c, 0.0, s)
    }

    /// Ray through the crosshair
    pub fn look_ray(&self) -> Ray {
        Ray::from_angles(self.position, self.yaw, self.pitch)
    }

    /// Yaw about Y, then pitch about the local X axis
    pub fn orientation(&self) -> Quat {
        rotation(Axis::Y, -self.yaw) * rotation(Axis::X, self.pitch)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let dir = self.look_ray().direction;
        Mat4::look_to_rh(self.position, dir, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_at_zero_yaw() {
        let cam = Camera::new(Vec3::ZERO, 0.0, -30.0);
        assert!(cam.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(cam.right().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_right_is_forward_turned_clockwise() {
        let cam = Camera::new(Vec3::ZERO, 90.0, -30.0);
        assert!(cam.forward().abs_diff_eq(Vec3::X, 1e-6));
        assert!(cam.right().abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn test_orientation_agrees_with_look_ray() {
        let cam = Camera::new(Vec3::new(1.0, 2.0, 3.0), 35.0, -40.0);
        let from_quat = cam.orientation() * Vec3::NEG_Z;
        let ray = cam.look_ray();
        assert_eq!(ray.origin, cam.position);
        assert!(from_quat.abs_diff_eq(ray.direction, 1e-5), "{from_quat:?} vs {:?}", ray.direction);
    }

    #[test]
    fn test_view_matrix_maps_eye_to_origin() {
        let cam = Camera::new(Vec3::new(0.0, 6.0, 20.0), 10.0, -30.0);
        let p = cam.view_matrix().transform_point3(cam.position);
        assert!(p.abs_diff_eq(Vec3::ZERO, 1e-4));
    }
}
