//! Fixed cosine palette mapping iteration counts to RGBA bytes.

use std::f64::consts::TAU;

/// Cosine phase offsets for the red, green, and blue channels. The
/// offsets are spread across the period to produce a smooth hue cycle.
const PHASE_R: f64 = 0.00;
const PHASE_G: f64 = 0.33;
const PHASE_B: f64 = 0.67;

/// Bytes per pixel in the output buffer (RGBA, 8 bits per channel).
pub const BYTES_PER_PIXEL: usize = 4;

#[inline]
fn channel(t: f64, phase: f64) -> u8 {
    (255.0 * (0.5 + 0.5 * (TAU * (t + phase)).cos())) as u8
}

/// Map iteration counts to RGBA bytes, preserving index order.
///
/// Counts are normalized against the largest observed count, floored at
/// 1 so an all-zero buffer maps without dividing by zero. Every pixel
/// is fully opaque.
pub fn colorize(counts: &[u32]) -> Vec<u8> {
    let n = counts.iter().copied().max().unwrap_or(0).max(1);
    let mut rgba = Vec::with_capacity(counts.len() * BYTES_PER_PIXEL);
    for &count in counts {
        let t = f64::from(count) / f64::from(n);
        rgba.push(channel(t, PHASE_R));
        rgba.push(channel(t, PHASE_G));
        rgba.push(channel(t, PHASE_B));
        rgba.push(255);
    }
    rgba
}
