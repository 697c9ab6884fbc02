// src/utilities/scale.rs
//
// Progress shaping for node animations.
// Every function takes a normalized progress value in [0, 1].

use std::f32::consts::PI;

/// Shifts a global progress value back by `i / n`, floored at zero.
pub fn clamp_progress(scale: f32, i: usize, n: usize) -> f32 {
    debug_assert!(n > 0, "phase count must be positive");
    (scale - i as f32 / n as f32).max(0.0)
}

/// Local progress of the i-th of `n` equal phases.
///
/// Returns 0 while `scale <= i / n`, 1 once `scale >= (i + 1) / n`,
/// and ramps linearly in between.
pub fn subdivide(scale: f32, i: usize, n: usize) -> f32 {
    let width = 1.0 / n as f32;
    clamp_progress(scale, i, n).min(width) * n as f32
}

/// Half sine pulse: 0 at both ends, 1 at the midpoint.
pub fn ease(scale: f32) -> f32 {
    (scale * PI).sin()
}
