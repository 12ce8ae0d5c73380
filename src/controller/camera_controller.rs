use std::collections::HashSet;
use std::ops::RangeInclusive;

use glam::Vec3;

use crate::controller::input::MoveIntent;
use crate::model::Camera;
use crate::settings::Settings;

/// Handles camera movement and orientation
#[derive(Debug, Clone)]
pub struct CameraController {
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub pitch_range: RangeInclusive<f32>,
    pub yaw_range: RangeInclusive<f32>,
    pub epsilon: f32,
}

impl CameraController {
    pub fn new(settings: &Settings) -> Self {
        Self {
            move_speed: settings.cam_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            pitch_range: settings.pitch_range.clone(),
            yaw_range: settings.yaw_range.clone(),
            epsilon: settings.ray_epsilon,
        }
    }

    /// Apply a mouse delta. Screen y grows downwards, so moving the mouse up
    /// raises the pitch.
    pub fn apply_look(&self, camera: &mut Camera, dx: f32, dy: f32) {
        camera.yaw = (camera.yaw + dx * self.mouse_sensitivity)
            .clamp(*self.yaw_range.start(), *self.yaw_range.end());
        camera.pitch = (camera.pitch - dy * self.mouse_sensitivity)
            .clamp(*self.pitch_range.start(), *self.pitch_range.end());
    }

    /// Level flight from held intents; diagonals are not faster
    pub fn update_movement(&self, camera: &mut Camera, held: &HashSet<MoveIntent>, dt: f32) {
        let forward = camera.forward();
        let right = camera.right();

        let cam_move: Vec3 = held
            .iter()
            .map(|intent| match intent {
                MoveIntent::Forward => forward,
                MoveIntent::Back => -forward,
                MoveIntent::StrafeRight => right,
                MoveIntent::StrafeLeft => -right,
                MoveIntent::Up => Vec3::Y,
                MoveIntent::Down => Vec3::NEG_Y,
            })
            .sum();

        if cam_move.length() > self.epsilon {
            camera.position += cam_move.normalize() * self.move_speed * dt;
        }
    }
}
