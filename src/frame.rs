//! Frame and pixel types for the transform engine
//!
//! A [`Frame`] is a fixed-size H×W grid of interleaved 8-bit RGB pixels,
//! row-major, exactly as a capture layer hands them over. The core never
//! resizes a frame; every transform produces an output with identical
//! dimensions.
//!
//! Channel order is RGB throughout this crate. Capture layers that deliver
//! BGR (common for webcam pipelines) must swap channels before constructing
//! a `Frame`.

use crate::error::{AssistError, Result};
use image::RgbImage;

/// A single pixel as `[r, g, b]` with each channel in [0, 255]
pub type Pixel = [u8; 3];

/// An immutable RGB frame with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame from raw interleaved RGB bytes
    ///
    /// # Errors
    ///
    /// Returns `AssistError::InvalidParameter` if `data.len()` does not equal
    /// `width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(AssistError::invalid_parameter(
                "frame data length",
                format!("{} (expected {} for {}x{})", data.len(), expected, width, height),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a frame filled with a single color
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&pixel);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert from an `image` crate RGB buffer
    pub fn from_image(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.as_raw().clone(),
        }
    }

    /// Convert into an `image` crate RGB buffer for display or encoding
    pub fn to_image(&self) -> RgbImage {
        // Length was validated at construction, so this cannot fail
        RgbImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw interleaved RGB bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Bounds-checked pixel access
    ///
    /// Returns `None` when `(x, y)` lies outside the frame. This is the
    /// accessor a UI layer uses for click-to-name lookups, so out-of-window
    /// coordinates must not panic.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Iterate over pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}
