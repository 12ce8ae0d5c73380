// Re-export all public modules so they can be used from main.rs
pub mod logging;
pub mod error;
pub mod settings;

// MVC Architecture; rendering lives outside this crate
pub mod model;
pub mod controller;

pub use controller::{InputEvent, MoveIntent, Session};
pub use error::{AppError, AppResult};
pub use model::{Aabb, BlockInstance, BlockType, Camera, Hit, Ray, World};
pub use settings::Settings;
