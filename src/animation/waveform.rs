use bevy_math::Vec3;
use crate::animation::math::remap;
use crate::core::body_params::{BodyType, BodyWaveParams};
use crate::core::movement_profile::MovementProfile;

// The undulating spine itself: an ordered head-to-tail point sequence plus
// the phase accumulator that scrolls the wave along it. Point count is fixed
// at construction and the order is never shuffled.
#[derive(Debug, Clone)]
pub struct BodyWave {
    points: Vec<Vec3>,
    phase: f32,
}

impl BodyWave {
    pub fn new(resolution: usize) -> Self {
        BodyWave {
            points: vec![Vec3::ZERO; resolution],
            phase: 0.0,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    // Advance the phase and recompute every spine point for the new time.
    pub fn advance(&mut self, params: &BodyWaveParams, profile: &MovementProfile, delta_time: f32) {
        self.phase += delta_time * params.wave_speed;
        let resolution = self.points.len();
        let x_increment = params.length / (resolution - 1) as f32;
        match params.body_type {
            BodyType::Sine => {
                for (i, point) in self.points.iter_mut().enumerate() {
                    let x = i as f32 * x_increment;
                    let y = params.amplitude * (params.frequency * (x + self.phase)).sin();
                    *point = Vec3::new(x, y, 0.0);
                }
            }
            BodyType::Square => {
                for (i, point) in self.points.iter_mut().enumerate() {
                    let x = i as f32 * x_increment;
                    let y = params.amplitude * (params.frequency * (x + self.phase)).sin().signum();
                    // Index 0 samples the profile at 1.0 and the tail at 0.0;
                    // the reversal matches the authored curves.
                    let reversed_i = remap(0.0, resolution as f32, 1.0, 0.0, i as f32);
                    let per_segment = profile.evaluate(reversed_i);
                    *point = Vec3::new(x, y * per_segment, 0.0);
                }
            }
        }
    }
}
