//! Axis ranges for the complex-plane viewing window.

use serde::{Deserialize, Serialize};

/// Closed interval on one axis of the viewing window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Full renderable domain of the real axis, and the range the engine
/// falls back to when a requested real range is rejected.
pub const REAL_AXIS_DEFAULT: AxisRange = AxisRange {
    min: -2.0,
    max: 1.0,
};

/// Full renderable domain of the imaginary axis, and its fallback range.
pub const IMAGINARY_AXIS_DEFAULT: AxisRange = AxisRange {
    min: -1.0,
    max: 1.0,
};

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the range is usable within `domain`: the bounds are
    /// distinct, ordered, and both lie inside the domain.
    pub fn is_valid_within(&self, domain: &AxisRange) -> bool {
        self.min != self.max
            && self.min <= self.max
            && self.min >= domain.min
            && self.max <= domain.max
    }
}
