pub mod axis;
pub mod complex;
pub mod escape;
pub mod geometry;
pub mod grid;
pub mod palette;

pub use axis::{AxisRange, IMAGINARY_AXIS_DEFAULT, REAL_AXIS_DEFAULT};
pub use complex::Complex;
pub use escape::{escape_time, ESCAPE_RADIUS_SQ};
pub use geometry::{ImageSize, MIN_DIMENSION};
pub use grid::{plane_grid, GridMapper};
pub use palette::{colorize, BYTES_PER_PIXEL};
