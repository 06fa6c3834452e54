//! Escape-time evaluation for the Mandelbrot recurrence z ← z² + c.

use crate::Complex;

/// Squared escape threshold. Once |z| exceeds 2 the orbit is proven to
/// diverge, so the check compares |z|² against 4 and skips the sqrt.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Iterate z ← z² + c from z₀ = 0 for at most `max_iterations` steps.
///
/// Returns the 0-based index of the step during which |z|² first
/// exceeded [`ESCAPE_RADIUS_SQ`], or `max_iterations` as the
/// non-escaping sentinel. Escapes therefore report values in
/// `0..max_iterations` and the sentinel never collides with them.
/// A cap of 0 classifies every point as non-escaping with value 0.
///
/// Only the current orbit value is kept; the recurrence never needs
/// orbit history.
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    for i in 0..max_iterations {
        z = z.square().add(&c);
        if z.norm_sq() > ESCAPE_RADIUS_SQ {
            return i;
        }
    }
    max_iterations
}
