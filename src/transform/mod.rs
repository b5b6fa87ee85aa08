//! Color transform engine
//!
//! This module applies per-pixel 3x3 linear transforms to simulate how a
//! frame appears to a viewer with a color vision deficiency, and derives
//! daltonized correction frames from the simulation delta.

pub mod daltonize;
pub mod matrix;

pub use daltonize::correct;
pub use matrix::{apply_matrix, simulate, ColorMatrix, Variant};
