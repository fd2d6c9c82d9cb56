use bevy_math::Vec3;
use crate::animation::math::{clamp01, lerp_angle};
use crate::core::rig::VelocityRotConfig;

// Frame-to-frame motion estimate of the velocity target. One sample is
// shared by every rotor and by the wing drive, so it must be updated exactly
// once per frame.
#[derive(Debug, Clone, Default)]
pub struct VelocitySample {
    last_position: Option<Vec3>,
    speed: f32,
    velocity: Vec3,
}

impl VelocitySample {
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    // Paused frames (dt <= 0) are skipped and the previous estimate is kept;
    // the first call only records the position and reports rest.
    pub fn track(&mut self, position: Vec3, delta_time: f32) {
        if delta_time <= 0.0 {
            return;
        }
        if let Some(last) = self.last_position {
            self.speed = position.distance(last) / delta_time;
            self.velocity = (position - last) / delta_time;
        }
        self.last_position = Some(position);
    }

    // Clamped roll target for one rotor, in degrees.
    pub fn target_roll(&self, config: &VelocityRotConfig) -> f32 {
        let mut roll = (self.velocity.y * config.speed_scale).clamp(config.range.0, config.range.1);
        if config.reverse {
            roll = -roll;
        }
        roll
    }

    // Smooth the rotor's current roll toward the velocity-derived target.
    pub fn smoothed_roll(&self, config: &VelocityRotConfig, current: f32, delta_time: f32) -> f32 {
        lerp_angle(current, self.target_roll(config), clamp01(delta_time * config.smoothing))
    }
}
