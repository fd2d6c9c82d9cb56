// Scalar and angular interpolation helpers shared by the animation stages.
// Lerp factors saturate at [0,1] and angles live in degrees, wrapped to
// [-180, 180).

pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    if a == b {
        0.0
    } else {
        clamp01((v - a) / (b - a))
    }
}

pub fn remap(i_min: f32, i_max: f32, o_min: f32, o_max: f32, v: f32) -> f32 {
    let t = inverse_lerp(i_min, i_max, v);
    lerp(o_min, o_max, t)
}

// Wrap an angle in degrees to [-180, 180).
pub fn normalize_angle(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

// Interpolate between two angles along the shorter arc.
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let delta = normalize_angle(b - a);
    normalize_angle(a + delta * clamp01(t))
}
