//! # cvd-assist
//!
//! A Rust crate for assisting color-vision-deficient users with live video
//! frames and pixel colors.
//!
//! This library provides the color science behind a color-blind-assist
//! application:
//! - Simulating how a frame appears under protanopia, deuteranopia, or
//!   tritanopia (per-pixel 3x3 linear transform)
//! - Computing daltonized correction frames that re-inject lost color
//!   contrast into visible channels
//! - Naming the color at a pixel in human-readable terms, from exact CSS
//!   keywords down to descriptive HSV phrases
//!
//! Camera capture, UI rendering, and speech synthesis are the caller's
//! responsibility; this crate only consumes raw frames and parameters and
//! produces frames and text.
//!
//! ## Example
//!
//! ```rust
//! use cvd_assist::{correct, simulate, ColorNamer, Frame, Variant};
//!
//! let frame = Frame::filled(4, 4, [255, 0, 0]);
//! let simulated = simulate(&frame, Variant::Protanopia);
//! let corrected = correct(&frame, Variant::Protanopia, 0.7);
//! assert_eq!(simulated.width(), frame.width());
//! assert_eq!(corrected.height(), frame.height());
//!
//! let namer = ColorNamer::new();
//! assert_eq!(namer.name_color([255, 0, 0], 50.0), "red");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod naming;
pub mod transform;

pub use config::AssistConfig;
pub use error::{AssistError, Result};
pub use frame::{Frame, Pixel};
pub use naming::{spoken_phrase, ColorNamer, NameSource, NamedColor, NamedColorEntry};
pub use transform::{apply_matrix, correct, simulate, ColorMatrix, Variant};

/// Name a pixel using the builtin dictionary
///
/// Convenience over [`ColorNamer`] for callers without a custom dictionary;
/// uses a process-wide namer initialized on first use.
pub fn name_color(pixel: Pixel, tolerance: f32) -> String {
    naming::default_namer().name_color(pixel, tolerance)
}
