//! The encoder seam: a narrow "persist an RGBA buffer" contract.
//!
//! The engine depends only on [`ImageSink`]; any encoder that can write
//! an RGBA byte buffer of the given dimensions is substitutable, which
//! is also how the tests observe renders without touching the disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to persist a pixel buffer.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The buffer does not hold `width * height` RGBA pixels.
    #[error("RGBA buffer is {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    /// The underlying encoder failed to produce or write the file.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Destination for a rendered RGBA buffer.
pub trait ImageSink {
    fn write_rgba(&self, rgba: &[u8], width: u32, height: u32) -> Result<(), SinkError>;
}

/// PNG file sink backed by the `image` crate.
#[derive(Clone, Debug)]
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for PngSink {
    fn write_rgba(&self, rgba: &[u8], width: u32, height: u32) -> Result<(), SinkError> {
        let expected = width as usize * height as usize * escapetime_core::BYTES_PER_PIXEL;
        if rgba.len() != expected {
            return Err(SinkError::BufferSize {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        image::save_buffer(
            &self.path,
            rgba,
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }
}
