//! Deficiency variants and the linear matrix transform primitive
//!
//! [`apply_matrix`] is the shared per-pixel kernel: normalize to [0,1],
//! multiply by a row-major 3x3 matrix, clip to [0,1], rescale to [0,255]
//! and truncate. [`simulate`] selects the constant matrix for a variant.

use crate::constants::matrices;
use crate::frame::Frame;
use serde::{Deserialize, Serialize};

/// Row-major 3x3 linear transform over normalized RGB
pub type ColorMatrix = [[f32; 3]; 3];

/// Supported color-vision-deficiency types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Red-blind (affects ~1% of males)
    Protanopia,
    /// Green-blind (affects ~1% of males)
    Deuteranopia,
    /// Blue-blind (affects ~0.01% of the population)
    Tritanopia,
}

impl Variant {
    /// All supported variants, in display order
    pub const ALL: [Variant; 3] = [
        Variant::Protanopia,
        Variant::Deuteranopia,
        Variant::Tritanopia,
    ];

    /// The simulation matrix for this variant
    pub fn matrix(&self) -> &'static ColorMatrix {
        match self {
            Variant::Protanopia => &matrices::PROTANOPIA,
            Variant::Deuteranopia => &matrices::DEUTERANOPIA,
            Variant::Tritanopia => &matrices::TRITANOPIA,
        }
    }

    /// Human-readable label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Protanopia => "Protanopia (Red-blind)",
            Variant::Deuteranopia => "Deuteranopia (Green-blind)",
            Variant::Tritanopia => "Tritanopia (Blue-blind)",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Variant::Protanopia => "protanopia",
            Variant::Deuteranopia => "deuteranopia",
            Variant::Tritanopia => "tritanopia",
        };
        f.write_str(name)
    }
}

/// Apply a 3x3 color matrix to every pixel of a frame
///
/// Each pixel is treated as a column vector in [0,1]; the product is clipped
/// componentwise to [0,1] (matrix rows are not row-stochastic in general, so
/// the product can leave the unit cube), rescaled to [0,255] and truncated to
/// an integer channel value.
///
/// The output frame has identical dimensions to the input. The transform is
/// pure and deterministic.
pub fn apply_matrix(frame: &Frame, matrix: &ColorMatrix) -> Frame {
    let src = frame.as_raw();
    let mut out = Vec::with_capacity(src.len());

    for pixel in src.chunks_exact(3) {
        let r = pixel[0] as f32 / 255.0;
        let g = pixel[1] as f32 / 255.0;
        let b = pixel[2] as f32 / 255.0;

        for row in matrix {
            let value = row[0] * r + row[1] * g + row[2] * b;
            out.push((value.clamp(0.0, 1.0) * 255.0) as u8);
        }
    }

    // Dimensions carried over unchanged, so length is valid by construction
    Frame::new(frame.width(), frame.height(), out)
        .unwrap_or_else(|_| unreachable!("matrix transform preserves buffer length"))
}

/// Simulate how a frame appears to a viewer with the given deficiency
pub fn simulate(frame: &Frame, variant: Variant) -> Frame {
    apply_matrix(frame, variant.matrix())
}
