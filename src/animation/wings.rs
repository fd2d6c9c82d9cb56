use crate::animation::math::{lerp, lerp_angle, remap};
use crate::core::rig::WingConfig;

// Flap driver shared by every wing. The smoothed amplitude is deliberately a
// single scalar so all wings swell and settle together with speed changes;
// `begin_frame` must run exactly once per frame, before the per-wing loop.
#[derive(Debug, Clone, Default)]
pub struct WingDrive {
    smoothed_amplitude: f32,
}

impl WingDrive {
    pub fn smoothed_amplitude(&self) -> f32 {
        self.smoothed_amplitude
    }

    pub fn begin_frame(&mut self, speed: f32, delta_time: f32) {
        let target_amplitude = remap(0.0, 100.0, 1.0, 2.0, speed);
        self.smoothed_amplitude = lerp(self.smoothed_amplitude, target_amplitude, delta_time * 10.0);
    }

    // Next smoothed flap angle for one wing, in degrees. Faster flight both
    // speeds up the sinusoid and tightens the smoothing toward it.
    pub fn flap_angle(
        &self,
        config: &WingConfig,
        speed: f32,
        elapsed: f32,
        current_angle: f32,
        delta_time: f32,
    ) -> f32 {
        let remapped_speed =
            remap(0.0, 100.0, config.speed_range.0, config.speed_range.1, speed) * config.speed_multiplier;
        let target = (elapsed * remapped_speed).sin() * (config.max_rotation * self.smoothed_amplitude);
        lerp_angle(current_angle, target, delta_time * (config.smoothing * remapped_speed))
    }
}
