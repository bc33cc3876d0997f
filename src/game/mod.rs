pub mod camera;
pub mod entity;
pub mod world;
