pub mod core;
pub mod animation;
pub mod systems;
pub mod management;
