//! Simulation matrices, naming thresholds, and default parameters
//!
//! This module contains the compile-time constants shared by the transform
//! engine and the color namer. The matrices and thresholds are fixed data,
//! initialized once and never mutated.

/// Color-vision-deficiency simulation matrices
///
/// Each matrix is a row-major 3x3 linear transform applied to an RGB pixel
/// normalized to [0,1]. Rows are not required to sum to 1; results outside
/// [0,1] are clipped, never renormalized.
pub mod matrices {
    /// Protanopia (red-blind) simulation matrix
    pub const PROTANOPIA: [[f32; 3]; 3] = [
        [0.56667, 0.43333, 0.0],
        [0.55833, 0.44167, 0.0],
        [0.0, 0.24167, 0.75833],
    ];

    /// Deuteranopia (green-blind) simulation matrix
    pub const DEUTERANOPIA: [[f32; 3]; 3] = [
        [0.625, 0.375, 0.0],
        [0.7, 0.3, 0.0],
        [0.0, 0.3, 0.7],
    ];

    /// Tritanopia (blue-blind) simulation matrix
    pub const TRITANOPIA: [[f32; 3]; 3] = [
        [0.95, 0.05, 0.0],
        [0.0, 0.43333, 0.56667],
        [0.0, 0.475, 0.525],
    ];
}

/// Thresholds for the descriptive HSV naming fallback
///
/// Saturation and value are expressed as percentages in [0,100], hue in
/// degrees [0,360). Band boundaries use strict comparison on the lower edge
/// (a saturation of exactly 20 is chromatic, not gray).
pub mod naming {
    /// Saturation below which a color is treated as achromatic (gray)
    pub const GRAY_MAX_SATURATION: f32 = 20.0;

    /// Value boundary between "very dark gray" and "gray"
    pub const GRAY_DARK_VALUE: f32 = 30.0;

    /// Value boundary between "gray" and "light gray"
    pub const GRAY_LIGHT_VALUE: f32 = 70.0;

    /// Value below which the "dark" modifier applies
    pub const DARK_VALUE: f32 = 30.0;

    /// Value above which the "bright" modifier applies
    pub const BRIGHT_VALUE: f32 = 80.0;

    /// Saturation below which the "pale" modifier applies
    pub const PALE_SATURATION: f32 = 40.0;

    /// Saturation above which the "vivid" modifier applies
    pub const VIVID_SATURATION: f32 = 80.0;

    /// Width of each named hue band in degrees
    pub const HUE_BAND_DEGREES: f32 = 30.0;

    /// Lower edge of the wrapped red band (hue >= 345 is red)
    pub const RED_WRAP_DEGREES: f32 = 345.0;
}

/// Default caller-facing parameters
pub mod defaults {
    /// Default daltonization strength (fraction of the lost color delta
    /// re-injected into the original frame)
    pub const STRENGTH: f32 = 0.7;

    /// Default dictionary matching tolerance (Euclidean RGB distance)
    pub const TOLERANCE: f32 = 50.0;

    /// Sensible slider range for tolerance in a UI
    pub const TOLERANCE_MIN: f32 = 10.0;
    pub const TOLERANCE_MAX: f32 = 100.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_coefficients_nonnegative() {
        // Physically plausible simulation matrices have no negative terms
        for matrix in [
            matrices::PROTANOPIA,
            matrices::DEUTERANOPIA,
            matrices::TRITANOPIA,
        ] {
            for row in matrix {
                for coeff in row {
                    assert!(coeff >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_naming_threshold_ordering() {
        assert!(naming::GRAY_DARK_VALUE < naming::GRAY_LIGHT_VALUE);
        assert!(naming::DARK_VALUE < naming::BRIGHT_VALUE);
        assert!(naming::PALE_SATURATION < naming::VIVID_SATURATION);
        assert!(naming::RED_WRAP_DEGREES < 360.0);
    }

    #[test]
    fn test_default_tolerance_in_slider_range() {
        assert!(defaults::TOLERANCE >= defaults::TOLERANCE_MIN);
        assert!(defaults::TOLERANCE <= defaults::TOLERANCE_MAX);
    }
}
