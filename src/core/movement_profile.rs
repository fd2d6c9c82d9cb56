use serde::{Serialize, Deserialize};

// Piecewise-linear curve mapping a normalized spine position to a scalar,
// used to taper the square wave per segment. Keys are (input, value) pairs
// sorted by input; evaluation clamps outside the keyed range.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MovementProfile {
    keys: Vec<(f32, f32)>,
}

impl MovementProfile {
    pub fn new(mut keys: Vec<(f32, f32)>) -> Self {
        keys.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        MovementProfile { keys }
    }

    // Flat curve, every segment moves at the same scale.
    pub fn constant(value: f32) -> Self {
        MovementProfile { keys: vec![(0.0, value), (1.0, value)] }
    }

    // y = x over [0, 1], handy for tests and tail-tapered rigs.
    pub fn identity() -> Self {
        MovementProfile { keys: vec![(0.0, 0.0), (1.0, 1.0)] }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let first = match self.keys.first() {
            Some(key) => key,
            None => return 0.0,
        };
        let last = self.keys.last().unwrap();
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for pair in self.keys.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if t <= x1 {
                if x1 == x0 {
                    return y1;
                }
                let s = (t - x0) / (x1 - x0);
                return y0 + (y1 - y0) * s;
            }
        }
        last.1
    }
}

impl Default for MovementProfile {
    fn default() -> Self {
        MovementProfile::constant(1.0)
    }
}
