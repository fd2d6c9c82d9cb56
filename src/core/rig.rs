use bevy::math::Vec3;
use serde::{Serialize, Deserialize};
use crate::core::body_params::{BodyType, BodyWaveParams};
use crate::core::movement_profile::MovementProfile;
use crate::core::rig_error::RigError;

// Full configuration for one animated body. Plain data, immutable after
// load; all smoothed state lives on the animator or the transform handles.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DragonRig {
    pub line_thickness: f32,
    pub smoothness: f32,
    pub wave: BodyWaveParams,
    pub movement_profile: MovementProfile,
    pub attachments: Vec<AttachmentConfig>,
    pub velocity_rotors: Vec<VelocityRotConfig>,
    pub wings: Vec<WingConfig>,
}

// Auxiliary object pinned to a spine point.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AttachmentConfig {
    pub chain_index: usize,
    pub offset: Vec3,
    pub rotation_scale: f32,
    pub apply_rotation: bool,
}

// Object whose roll tracks the vertical velocity of the velocity target.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VelocityRotConfig {
    pub range: (f32, f32),   // clamp bounds for the target roll, degrees
    pub speed_scale: f32,
    pub smoothing: f32,
    pub reverse: bool,
}

// Wing driven by a speed-remapped sinusoid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WingConfig {
    pub speed_range: (f32, f32),
    pub speed_multiplier: f32,
    pub max_rotation: f32,   // degrees at full amplitude
    pub smoothing: f32,
    #[serde(default)]
    pub flap_axis: RotationAxis,
}

// Euler axis the smoothed wing angle is stored on. The source rig keeps it
// on Y; kept configurable per wing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    pub fn read(&self, euler_degrees: Vec3) -> f32 {
        match self {
            RotationAxis::X => euler_degrees.x,
            RotationAxis::Y => euler_degrees.y,
            RotationAxis::Z => euler_degrees.z,
        }
    }

    pub fn write(&self, angle_degrees: f32) -> Vec3 {
        match self {
            RotationAxis::X => Vec3::new(angle_degrees, 0.0, 0.0),
            RotationAxis::Y => Vec3::new(0.0, angle_degrees, 0.0),
            RotationAxis::Z => Vec3::new(0.0, 0.0, angle_degrees),
        }
    }
}

impl Default for RotationAxis {
    fn default() -> Self {
        RotationAxis::Y
    }
}

impl Default for DragonRig {
    fn default() -> Self {
        DragonRig {
            line_thickness: 1.0,
            smoothness: 0.5,
            wave: BodyWaveParams::default(),
            movement_profile: MovementProfile::default(),
            attachments: Vec::new(),
            velocity_rotors: Vec::new(),
            wings: Vec::new(),
        }
    }
}

impl DragonRig {
    // All range and index checks happen here, once, so the per-frame path
    // never has to.
    pub fn validate(&self) -> Result<(), RigError> {
        if self.wave.resolution < 2 {
            return Err(RigError::BadResolution(self.wave.resolution));
        }
        if self.wave.wave_speed < 0.0 {
            return Err(RigError::NegativeWaveSpeed(self.wave.wave_speed));
        }
        if self.wave.body_type == BodyType::Square && self.movement_profile.is_empty() {
            return Err(RigError::EmptyMovementProfile);
        }
        for attachment in &self.attachments {
            if attachment.chain_index >= self.wave.resolution {
                return Err(RigError::AttachmentIndexOutOfRange {
                    index: attachment.chain_index,
                    resolution: self.wave.resolution,
                });
            }
        }
        for rotor in &self.velocity_rotors {
            if rotor.range.0 > rotor.range.1 {
                return Err(RigError::InvalidClampRange {
                    min: rotor.range.0,
                    max: rotor.range.1,
                });
            }
        }
        Ok(())
    }
}
