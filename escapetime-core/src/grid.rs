//! Pixel-to-plane coordinate mapping.
//!
//! The grid scans the viewing window top-to-bottom (decreasing imaginary
//! part) and left-to-right (increasing real part), so index 0 is the
//! window's top-left corner `(re_min, im_max)` and the flat index of
//! pixel (row, col) is `row * width + col`.

use crate::{AxisRange, Complex, ImageSize};

/// Precomputed pixel-to-plane mapping for one render pass.
#[derive(Clone, Copy, Debug)]
pub struct GridMapper {
    re_min: f64,
    im_max: f64,
    d_re: f64,
    d_im: f64,
}

impl GridMapper {
    pub fn new(size: ImageSize, real: &AxisRange, imaginary: &AxisRange) -> Self {
        // W-1 and H-1 steps span the window; both are >= 1 because
        // dimensions are clamped to a minimum of 2.
        Self {
            re_min: real.min,
            im_max: imaginary.max,
            d_re: real.span() / f64::from(size.width() - 1),
            d_im: imaginary.span() / f64::from(size.height() - 1),
        }
    }

    /// Plane coordinate of the pixel at `row` (from the top) and `col`
    /// (from the left).
    pub fn coordinate(&self, row: u16, col: u16) -> Complex {
        Complex::new(
            self.re_min + f64::from(col) * self.d_re,
            self.im_max - f64::from(row) * self.d_im,
        )
    }
}

/// Build the full row-major coordinate grid, one entry per pixel.
pub fn plane_grid(size: ImageSize, real: &AxisRange, imaginary: &AxisRange) -> Vec<Complex> {
    let mapper = GridMapper::new(size, real, imaginary);
    let mut grid = Vec::with_capacity(size.pixel_count());
    for row in 0..size.height() {
        for col in 0..size.width() {
            grid.push(mapper.coordinate(row, col));
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IMAGINARY_AXIS_DEFAULT, REAL_AXIS_DEFAULT};

    #[test]
    fn two_by_two_grid_hits_window_corners() {
        let grid = plane_grid(
            ImageSize::new(2, 2),
            &REAL_AXIS_DEFAULT,
            &IMAGINARY_AXIS_DEFAULT,
        );
        assert_eq!(
            grid,
            vec![
                Complex::new(-2.0, 1.0),
                Complex::new(1.0, 1.0),
                Complex::new(-2.0, -1.0),
                Complex::new(1.0, -1.0),
            ]
        );
    }

    #[test]
    fn grid_length_matches_pixel_count() {
        let size = ImageSize::new(17, 9);
        let grid = plane_grid(size, &REAL_AXIS_DEFAULT, &IMAGINARY_AXIS_DEFAULT);
        assert_eq!(grid.len(), size.pixel_count());
    }

    #[test]
    fn center_pixel_of_symmetric_window_is_origin() {
        let real = AxisRange::new(-1.0, 1.0);
        let imaginary = AxisRange::new(-1.0, 1.0);
        let mapper = GridMapper::new(ImageSize::new(3, 3), &real, &imaginary);
        assert_eq!(mapper.coordinate(1, 1), Complex::ZERO);
    }

    #[test]
    fn flat_index_is_row_major() {
        let size = ImageSize::new(4, 3);
        let mapper = GridMapper::new(size, &REAL_AXIS_DEFAULT, &IMAGINARY_AXIS_DEFAULT);
        let grid = plane_grid(size, &REAL_AXIS_DEFAULT, &IMAGINARY_AXIS_DEFAULT);
        for row in 0..size.height() {
            for col in 0..size.width() {
                let index = usize::from(row) * usize::from(size.width()) + usize::from(col);
                assert_eq!(grid[index], mapper.coordinate(row, col));
            }
        }
    }

    #[test]
    fn imaginary_part_decreases_down_the_rows() {
        let mapper = GridMapper::new(
            ImageSize::new(2, 5),
            &REAL_AXIS_DEFAULT,
            &IMAGINARY_AXIS_DEFAULT,
        );
        let top = mapper.coordinate(0, 0).im;
        let bottom = mapper.coordinate(4, 0).im;
        assert_eq!(top, 1.0);
        assert_eq!(bottom, -1.0);
        assert!(top > bottom);
    }

    #[test]
    fn real_part_increases_across_the_columns() {
        let mapper = GridMapper::new(
            ImageSize::new(5, 2),
            &REAL_AXIS_DEFAULT,
            &IMAGINARY_AXIS_DEFAULT,
        );
        assert_eq!(mapper.coordinate(0, 0).re, -2.0);
        assert_eq!(mapper.coordinate(0, 4).re, 1.0);
    }
}
