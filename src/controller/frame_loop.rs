use tracing::{debug, info};

use crate::controller::camera_controller::CameraController;
use crate::controller::input::{InputEvent, InputSnapshot, InputState, PendingAction};
use crate::model::{BlockInstance, BlockType, Camera, World};
use crate::settings::Settings;

/// Turns a monotonic millisecond timestamp into per-frame `dt` seconds.
/// The first frame of a session is `dt = 0`.
///
/// Gaps are capped at `max_dt`, so after a stall longer than that the camera
/// covers less ground than the wall clock says it should. Backwards jumps
/// give `dt = 0`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, self.max_dt as f64) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

/// Everything a running sandbox owns: camera, world and pending input.
/// One tick per frame, driven by the front-end.
pub struct Session {
    camera: Camera,
    camera_controller: CameraController,
    world: World,
    input_state: InputState,
    clock: FrameClock,
    current_block: BlockType,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        info!(
            "new session at {:?}, yaw {} pitch {}, block {}",
            settings.spawn_position, settings.spawn_yaw, settings.spawn_pitch, settings.default_block
        );
        Self {
            camera: Camera::new(settings.spawn_position, settings.spawn_yaw, settings.spawn_pitch),
            camera_controller: CameraController::new(settings),
            world: World::new(settings.ground, settings.ray_epsilon),
            input_state: InputState::new(),
            clock: FrameClock::new(settings.max_frame_dt),
            current_block: settings.default_block.clone(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn current_block(&self) -> &BlockType {
        &self.current_block
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input_state.process_event(event);
    }

    /// Advance the clock to `now_ms` and run one tick.
    /// Returns the blocks placed this frame.
    pub fn update(&mut self, now_ms: f64) -> &[BlockInstance] {
        let dt = self.clock.advance(now_ms);
        let input = self.input_state.snapshot();
        self.tick(dt, &input)
    }

    /// Replay look samples and place requests in arrival order, then move.
    /// Each sample is clamped on its own and each place sees the camera as
    /// it was when the request came in.
    pub fn tick(&mut self, dt: f32, input: &InputSnapshot) -> &[BlockInstance] {
        let before = self.world.len();
        for action in &input.actions {
            match *action {
                PendingAction::Look { dx, dy } => {
                    self.camera_controller.apply_look(&mut self.camera, dx, dy);
                }
                PendingAction::Place => {
                    self.place_at_crosshair();
                }
            }
        }
        self.camera_controller
            .update_movement(&mut self.camera, &input.held, dt);

        &self.world.blocks()[before..]
    }

    pub fn place_at_crosshair(&mut self) -> Option<&BlockInstance> {
        let ray = self.camera.look_ray();
        let placed = self.world.place_at(&self.current_block, &ray);
        if placed.is_none() {
            debug!("place ignored, nothing under the crosshair");
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::input::MoveIntent;
    use glam::Vec3;

    #[test]
    fn test_first_tick_is_zero_dt() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(5_000.0), 0.0);
        assert!((clock.advance(5_016.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_clock_clamps_gaps() {
        let mut clock = FrameClock::new(0.1);
        clock.advance(1_000.0);
        assert_eq!(clock.advance(900.0), 0.0);
        assert_eq!(clock.advance(10_000.0), 0.1);
    }

    #[test]
    fn test_first_update_does_not_move() {
        let mut session = Session::new(&Settings::default());
        let start = session.camera().position;
        session.handle_event(&InputEvent::IntentPressed(MoveIntent::Forward));
        session.update(123_456.0);
        assert_eq!(session.camera().position, start);

        session.update(123_556.0);
        let moved = (session.camera().position - start).length();
        assert!((moved - 0.6).abs() < 1e-4, "moved {moved}");
    }

    #[test]
    fn test_place_from_spawn_lands_on_ground() {
        let mut session = Session::new(&Settings::default());
        session.handle_event(&InputEvent::PlaceRequested);
        let placed = session.update(0.0).to_vec();
        assert_eq!(placed.len(), 1);

        // spawn at (0, 6, 20) pitched -30 degrees looks down at the ground
        assert!((placed[0].center.y - (0.5 + 0.5 + 1e-5)).abs() < 1e-4);
        assert!(placed[0].center.z < 20.0);
        assert_eq!(session.world().len(), 1);

        // request was consumed
        assert!(session.update(16.0).is_empty());
        assert_eq!(session.world().len(), 1);
    }

    #[test]
    fn test_place_with_no_target_is_noop() {
        let mut settings = Settings::default();
        settings.spawn_position = Vec3::new(0.0, -50.0, 0.0);
        let mut session = Session::new(&settings);
        session.handle_event(&InputEvent::PlaceRequested);
        assert!(session.update(0.0).is_empty());
        assert!(session.world().is_empty());
    }

    #[test]
    fn test_each_look_sample_is_clamped_on_its_own() {
        let mut session = Session::new(&Settings::default());
        // the first flick pins pitch at -5, the second pulls it back down 15
        session.handle_event(&InputEvent::MouseMotion { dx: 0.0, dy: -1_000.0 });
        session.handle_event(&InputEvent::MouseMotion { dx: 0.0, dy: 100.0 });
        session.update(0.0);
        assert!((session.camera().pitch - -20.0).abs() < 1e-4, "pitch {}", session.camera().pitch);
    }

    #[test]
    fn test_place_uses_camera_at_request_time() {
        let mut session = Session::new(&Settings::default());
        session.handle_event(&InputEvent::PlaceRequested);
        session.handle_event(&InputEvent::MouseMotion { dx: 0.0, dy: -1_000.0 });
        let placed = session.update(0.0).to_vec();
        assert_eq!(session.camera().pitch, -5.0);

        // still pitched -30 at the click: 5.5 / tan(30 deg) ~ 9.53 ahead
        let expected_z = 20.0 - 5.5 / 30f32.to_radians().tan();
        assert_eq!(placed.len(), 1);
        assert!((placed[0].center.z - expected_z).abs() < 0.01, "z = {}", placed[0].center.z);
    }

    #[test]
    fn test_look_before_place_moves_the_target() {
        let mut session = Session::new(&Settings::default());
        session.handle_event(&InputEvent::MouseMotion { dx: 0.0, dy: -1_000.0 });
        session.handle_event(&InputEvent::PlaceRequested);
        let placed = session.update(0.0).to_vec();

        // shallow pitch puts the block far ahead: 5.5 / tan(5 deg) ~ 62.9
        let expected_z = 20.0 - 5.5 / 5f32.to_radians().tan();
        assert_eq!(placed.len(), 1);
        assert!((placed[0].center.z - expected_z).abs() < 0.05, "z = {}", placed[0].center.z);
    }

    #[test]
    fn test_every_request_in_a_frame_places() {
        let mut session = Session::new(&Settings::default());
        session.handle_event(&InputEvent::PlaceRequested);
        session.handle_event(&InputEvent::PlaceRequested);
        assert_eq!(session.update(0.0).len(), 2);
        assert_eq!(session.world().len(), 2);
    }
}
