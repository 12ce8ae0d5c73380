// MODEL: Geometry, camera state and the placed-block world
pub mod math;
pub mod aabb;
pub mod ray;
pub mod placement;
pub mod world;
pub mod camera;

pub use aabb::Aabb;
pub use ray::{Ray, Hit};
pub use placement::placement_center;
pub use world::{BlockInstance, BlockType, World};
pub use camera::Camera;
