#[derive(Debug)]
pub enum RigError {
    BadResolution(usize),
    AttachmentIndexOutOfRange { index: usize, resolution: usize },
    InvalidClampRange { min: f32, max: f32 },
    EmptyMovementProfile,
    NegativeWaveSpeed(f32),
    ImportFailed(String),
    Other(String),
}

impl From<&str> for RigError {
    fn from(error: &str) -> Self {
        RigError::Other(error.to_string())
    }
}
