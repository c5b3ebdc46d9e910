//! 20.12 fixed-point stepping.
//!
//! Velocities are stored as pixels-per-second scaled by [`FIXED_ONE`]. Each
//! frame the scaled displacement plus the carried residue is split into whole
//! pixels and a new residue, so the long-run displacement matches the
//! continuous velocity regardless of frame time.

pub const FIXED_SHIFT: u32 = 12;
pub const FIXED_ONE: i32 = 1 << FIXED_SHIFT;

const SIGN_EPSILON: f32 = 0.0001;

/// -1, 0 or 1. Magnitudes below `0.0001` count as zero.
pub fn sign(value: f32) -> i32 {
    if value.abs() < SIGN_EPSILON {
        0
    } else if value < 0.0 {
        -1
    } else {
        1
    }
}

/// Whole pixels in a scaled displacement, truncated toward zero.
pub fn pixel_step(raw: f32) -> i32 {
    let whole = raw.abs() as i32 / FIXED_ONE;
    whole * sign(raw)
}

/// Pixel step the current velocity and residue would produce this frame.
pub fn intended_step(velocity: f32, residue: f32, dt_seconds: f32) -> i32 {
    pixel_step(velocity * dt_seconds + residue)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStep {
    pub pixels: i32,
    pub residue: f32,
}

/// Splits one frame of motion into whole pixels and the remainder to carry.
pub fn split_step(velocity: f32, residue: f32, dt_seconds: f32) -> AxisStep {
    let raw = velocity * dt_seconds + residue;
    let pixels = pixel_step(raw);
    AxisStep {
        pixels,
        residue: raw - (pixels * FIXED_ONE) as f32,
    }
}
