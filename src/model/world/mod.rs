pub mod block;
pub mod registry;

pub use block::{BlockInstance, BlockType};
pub use registry::{default_ground, World};
