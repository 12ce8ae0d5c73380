// CONTROLLER: Input, camera kinematics and the per-frame update
pub mod input;
pub mod camera_controller;
pub mod frame_loop;

pub use input::{InputEvent, InputSnapshot, InputState, MouseTracker, MoveIntent, PendingAction};
pub use camera_controller::CameraController;
pub use frame_loop::{FrameClock, Session};
