use bevy_math::Vec3;
use crate::animation::math::clamp01;

// Per-point lag toward the wave target's displacement from its origin.
// Later points smooth faster, so the tail whips after the head settles.
// Allocated once, parallel to the spine, mutated in place every frame.
#[derive(Debug, Clone)]
pub struct LagOffsets {
    offsets: Vec<Vec3>,
}

impl LagOffsets {
    pub fn new(resolution: usize) -> Self {
        LagOffsets {
            offsets: vec![Vec3::ZERO; resolution],
        }
    }

    pub fn offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    pub fn offset(&self, index: usize) -> Vec3 {
        self.offsets[index]
    }

    // Exponentially approach `delta`; never reaches it in a single step for
    // sane frame times, which is what produces the trailing motion.
    pub fn follow(&mut self, delta: Vec3, smoothness: f32, delta_time: f32) {
        for (i, offset) in self.offsets.iter_mut().enumerate() {
            // The +3 keeps the head's rate away from zero at i = 0.
            let smoothing_index = (i + 3) as f32;
            let t = clamp01(delta_time * smoothness * smoothing_index);
            *offset = offset.lerp(delta, t);
        }
    }
}
