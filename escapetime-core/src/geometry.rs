//! Pixel dimensions of the output image.

use serde::{Deserialize, Serialize};

/// Smallest accepted value for either image dimension. Anything below
/// this would make the per-axis step size `span / (dim - 1)` degenerate.
pub const MIN_DIMENSION: u16 = 2;

/// Width and height of the pixel grid.
///
/// Each dimension is clamped independently to [`MIN_DIMENSION`] at
/// construction. The correction is silent: no error, no report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    width: u16,
    height: u16,
}

impl ImageSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(MIN_DIMENSION),
            height: height.max(MIN_DIMENSION),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of pixels in the grid.
    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: 1020,
            height: 680,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_1020_by_680() {
        let size = ImageSize::default();
        assert_eq!((size.width(), size.height()), (1020, 680));
    }

    #[test]
    fn requested_size_is_kept_when_large_enough() {
        let size = ImageSize::new(640, 480);
        assert_eq!((size.width(), size.height()), (640, 480));
    }

    #[test]
    fn each_dimension_clamps_independently() {
        assert_eq!(ImageSize::new(1, 1), ImageSize::new(2, 2));
        let wide = ImageSize::new(3, 1);
        assert_eq!((wide.width(), wide.height()), (3, 2));
        let tall = ImageSize::new(1, 3);
        assert_eq!((tall.width(), tall.height()), (2, 3));
    }

    #[test]
    fn pixel_count_is_width_times_height() {
        assert_eq!(ImageSize::new(100, 50).pixel_count(), 5000);
        assert_eq!(ImageSize::default().pixel_count(), 1020 * 680);
    }
}
