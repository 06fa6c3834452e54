pub mod engine;
pub mod sink;

pub use engine::{Mandelbrot, RenderError, RenderMode, DEFAULT_MAX_ITERATIONS};
pub use sink::{ImageSink, PngSink, SinkError};

// Re-export core types for convenience
pub use escapetime_core::*;
