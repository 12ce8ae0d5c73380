//! Tunables for the camera, targeting and the starting scene.
//!
//! Defaults are the values the sandbox ships with. A few can be overridden
//! from the environment:
//!
//! - `BLOCKBUILDER_CAM_SPEED` (units per second)
//! - `BLOCKBUILDER_MOUSE_SENSITIVITY` (degrees per pixel)
//! - `BLOCKBUILDER_MAX_FRAME_DT` (seconds)

use std::env;
use std::ops::RangeInclusive;

use glam::Vec3;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::model::world::default_ground;
use crate::model::{Aabb, BlockType};

pub const CAM_SPEED: f32 = 6.0;
pub const MOUSE_SENSITIVITY: f32 = 0.15;
pub const PITCH_RANGE: RangeInclusive<f32> = -89.0..=-5.0;
pub const YAW_RANGE: RangeInclusive<f32> = -179.0..=179.0;
pub const RAY_EPSILON: f32 = 1e-6;

const ENV_CAM_SPEED: &str = "BLOCKBUILDER_CAM_SPEED";
const ENV_MOUSE_SENSITIVITY: &str = "BLOCKBUILDER_MOUSE_SENSITIVITY";
const ENV_MAX_FRAME_DT: &str = "BLOCKBUILDER_MAX_FRAME_DT";

#[derive(Debug, Clone)]
pub struct Settings {
    pub cam_speed: f32,
    pub mouse_sensitivity: f32,
    /// Pitch stays strictly below the horizon
    pub pitch_range: RangeInclusive<f32>,
    pub yaw_range: RangeInclusive<f32>,
    pub ray_epsilon: f32,
    pub default_block: BlockType,
    pub spawn_position: Vec3,
    pub spawn_yaw: f32,
    pub spawn_pitch: f32,
    pub ground: Aabb,
    /// Longest frame gap fed to movement, in seconds
    pub max_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cam_speed: CAM_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            pitch_range: PITCH_RANGE,
            yaw_range: YAW_RANGE,
            ray_epsilon: RAY_EPSILON,
            default_block: BlockType::unit_cube(),
            spawn_position: Vec3::new(0.0, 6.0, 20.0),
            spawn_yaw: 0.0,
            spawn_pitch: -30.0,
            ground: default_ground(),
            max_frame_dt: 0.1,
        }
    }
}

impl Settings {
    /// Defaults with environment overrides applied. Bad values are logged
    /// and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let targets: [(&'static str, &mut f32); 3] = [
            (ENV_CAM_SPEED, &mut settings.cam_speed),
            (ENV_MOUSE_SENSITIVITY, &mut settings.mouse_sensitivity),
            (ENV_MAX_FRAME_DT, &mut settings.max_frame_dt),
        ];
        for (key, slot) in targets {
            let Some(raw) = lookup(key) else { continue };
            match parse_non_negative(key, &raw) {
                Ok(v) => *slot = v,
                Err(err) => warn!("{err}, keeping default"),
            }
        }
        settings
    }
}

fn parse_non_negative(key: &'static str, raw: &str) -> AppResult<f32> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(AppError::InvalidSetting {
            key,
            value: raw.to_string(),
        }),
    }
}
