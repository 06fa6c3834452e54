//! The Mandelbrot engine: owns the render configuration and the
//! per-pixel iteration buffer, and drives one full render pass.

use escapetime_core::{
    colorize, escape_time, plane_grid, AxisRange, GridMapper, ImageSize, IMAGINARY_AXIS_DEFAULT,
    REAL_AXIS_DEFAULT,
};
use log::{debug, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::sink::{ImageSink, SinkError};

/// Iteration cap used until `set_iterations` is called.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// How `render` schedules per-pixel work.
///
/// Pixels are independent, so the parallel path splits the iteration
/// buffer into row chunks and lets each rayon worker write its own
/// disjoint slice. Both paths produce identical buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// One blocking pass over the whole grid.
    #[default]
    Sequential,
    /// Row-parallel pass on the rayon thread pool.
    Parallel,
}

/// Render failure. The engine's own state stays valid and reusable; a
/// failed render only means the sink did not persist the image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Escape-time renderer for a rectangular window of the complex plane.
///
/// Configuration is corrected rather than rejected: undersized
/// dimensions clamp silently, and invalid axis bounds reset the axis to
/// its full domain with a `false` return. No configuration can leave
/// the engine unable to render.
pub struct Mandelbrot {
    size: ImageSize,
    real_axis: AxisRange,
    imaginary_axis: AxisRange,
    max_iterations: u32,
    mode: RenderMode,
    counts: Vec<u32>,
}

impl Mandelbrot {
    /// Engine with the default 1020x680 grid over the full window.
    pub fn new() -> Self {
        Self::with_size(ImageSize::default())
    }

    /// Engine with a caller-chosen grid size (clamped per dimension).
    pub fn with_size(size: ImageSize) -> Self {
        Self {
            size,
            real_axis: REAL_AXIS_DEFAULT,
            imaginary_axis: IMAGINARY_AXIS_DEFAULT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            mode: RenderMode::default(),
            counts: vec![0; size.pixel_count()],
        }
    }

    /// Replace the grid size and reallocate the iteration buffer.
    /// Undersized dimensions are clamped silently, each on its own.
    pub fn set_image_size(&mut self, width: u16, height: u16) {
        self.size = ImageSize::new(width, height);
        self.counts = vec![0; self.size.pixel_count()];
    }

    /// Set the iteration cap. Any value is accepted, including 0, which
    /// classifies every pixel as non-escaping.
    pub fn set_iterations(&mut self, max_iterations: u32) {
        self.max_iterations = max_iterations;
    }

    /// Set the real-axis window. Bounds must be distinct, ordered, and
    /// inside [-2, 1]; otherwise the axis resets to [-2, 1] and the
    /// call reports `false`.
    pub fn set_real_axis(&mut self, min: f64, max: f64) -> bool {
        Self::apply_axis(&mut self.real_axis, min, max, REAL_AXIS_DEFAULT, "real")
    }

    /// Set the imaginary-axis window. Bounds must be distinct, ordered,
    /// and inside [-1, 1]; otherwise the axis resets to [-1, 1] and the
    /// call reports `false`.
    pub fn set_imaginary_axis(&mut self, min: f64, max: f64) -> bool {
        Self::apply_axis(
            &mut self.imaginary_axis,
            min,
            max,
            IMAGINARY_AXIS_DEFAULT,
            "imaginary",
        )
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn image_size(&self) -> ImageSize {
        self.size
    }

    pub fn real_axis(&self) -> AxisRange {
        self.real_axis
    }

    pub fn imaginary_axis(&self) -> AxisRange {
        self.imaginary_axis
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Iteration counts from the most recent render, row-major from the
    /// window's top-left. All zeros before the first render.
    pub fn iteration_counts(&self) -> &[u32] {
        &self.counts
    }

    /// Run one full render pass: map every pixel to its plane
    /// coordinate, evaluate escape time, colorize, and hand the RGBA
    /// buffer to the sink. Sink failure is the only failure.
    pub fn render(&mut self, sink: &dyn ImageSink) -> Result<(), RenderError> {
        debug!(
            "rendering {}x{} at {} iterations, {:?}",
            self.size.width(),
            self.size.height(),
            self.max_iterations,
            self.mode,
        );
        match self.mode {
            RenderMode::Sequential => self.fill_sequential(),
            RenderMode::Parallel => self.fill_parallel(),
        }
        let rgba = colorize(&self.counts);
        sink.write_rgba(
            &rgba,
            u32::from(self.size.width()),
            u32::from(self.size.height()),
        )?;
        Ok(())
    }

    fn apply_axis(slot: &mut AxisRange, min: f64, max: f64, default: AxisRange, name: &str) -> bool {
        let requested = AxisRange::new(min, max);
        if requested.is_valid_within(&default) {
            *slot = requested;
            true
        } else {
            warn!(
                "invalid {name} axis [{min}, {max}], resetting to [{}, {}]",
                default.min, default.max
            );
            *slot = default;
            false
        }
    }

    fn fill_sequential(&mut self) {
        let grid = plane_grid(self.size, &self.real_axis, &self.imaginary_axis);
        for (count, c) in self.counts.iter_mut().zip(&grid) {
            *count = escape_time(*c, self.max_iterations);
        }
    }

    fn fill_parallel(&mut self) {
        let mapper = GridMapper::new(self.size, &self.real_axis, &self.imaginary_axis);
        let width = usize::from(self.size.width());
        let max_iterations = self.max_iterations;
        self.counts
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, row_counts)| {
                for (col, count) in row_counts.iter_mut().enumerate() {
                    let c = mapper.coordinate(row as u16, col as u16);
                    *count = escape_time(c, max_iterations);
                }
            });
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new()
    }
}
