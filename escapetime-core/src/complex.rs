//! f64 complex arithmetic for escape-time iteration.

use serde::{Deserialize, Serialize};

/// Complex number with f64 components and pure value semantics.
///
/// Equality is exact component-wise comparison (the derived `PartialEq`),
/// with no epsilon tolerance; tests depend on that determinism. NaN and
/// infinity are never rejected and propagate per IEEE 754.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// The additive identity, also the orbit's starting value.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Complex square (optimized form of `self.mul(self)`).
    #[inline]
    pub fn square(&self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    /// Magnitude squared (for escape checks, avoids the sqrt).
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}
