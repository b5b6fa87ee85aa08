//! Daltonization: corrective re-injection of lost color information
//!
//! The simulated frame approximates what a deficient viewer perceives; the
//! per-channel delta between original and simulation approximates the color
//! information the deficiency destroys. Adding a fraction of that delta back
//! into the original frame shifts the lost contrast into channels the viewer
//! can still discriminate. The simulation matrices are rank-deficient, so a
//! full inversion is not available; partial re-injection is the stable
//! alternative.

use crate::frame::Frame;
use crate::transform::matrix::{simulate, Variant};

/// Compute a daltonized correction frame
///
/// Per channel, as signed floating-point math with no intermediate clamping:
///
/// ```text
/// error     = original - simulated
/// corrected = original + strength * error
/// ```
///
/// The corrected value is clamped to [0,255] and truncated. A strength of 0
/// reproduces the input exactly; values above 1 are permitted and simply
/// overshoot the correction.
pub fn correct(frame: &Frame, variant: Variant, strength: f32) -> Frame {
    let simulated = simulate(frame, variant);

    let src = frame.as_raw();
    let sim = simulated.as_raw();
    let mut out = Vec::with_capacity(src.len());

    for (&orig, &simmed) in src.iter().zip(sim.iter()) {
        let error = orig as f32 - simmed as f32;
        let corrected = orig as f32 + strength * error;
        out.push(corrected.clamp(0.0, 255.0) as u8);
    }

    Frame::new(frame.width(), frame.height(), out)
        .unwrap_or_else(|_| unreachable!("correction preserves buffer length"))
}
