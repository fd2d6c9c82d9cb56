use serde::{Serialize, Deserialize};

// Shape of the undulating spine. The set is closed on purpose: adding a new
// shape forces every dispatch site to handle it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Sine,
    Square,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BodyWaveParams {
    pub body_type: BodyType,
    pub amplitude: f32,      // peak lateral offset in meters
    pub frequency: f32,      // spatial frequency along the spine, radians per meter
    pub length: f32,         // head-to-tail spine length in world units
    pub resolution: usize,   // number of spine points, fixed after init
    pub wave_speed: f32,     // phase advance per second
}

impl Default for BodyWaveParams {
    fn default() -> Self {
        BodyWaveParams {
            body_type: BodyType::Square,
            amplitude: 2.0,
            frequency: 0.68,
            length: 16.89,
            resolution: 7,
            wave_speed: 10.0,
        }
    }
}
