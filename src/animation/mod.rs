pub mod math;
pub mod waveform;
pub mod follower;
pub mod compositor;
pub mod velocity;
pub mod wings;
pub mod animator;
