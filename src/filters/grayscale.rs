//! Grayscale conversion filter.
//!
//! Uses the plain channel average `round((R + G + B) / 3)` rather than a
//! weighted luminosity. Several other filters (edge detection, halftone,
//! ASCII) call this as their preprocessing step, so they all share the
//! same notion of brightness.

use ndarray::{Array3, ArrayView3};

/// Convert an RGBA image to grayscale (channel average).
///
/// Output is RGBA with R=G=B=round((R+G+B)/3), alpha preserved.
/// Total over all valid inputs and idempotent: converting an already
/// grayscale image is a no-op.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// New array with averaged values in RGB channels, alpha preserved
pub fn grayscale_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            let avg = ((r + g + b) / 3.0).round() as u8;

            output[[y, x, 0]] = avg;
            output[[y, x, 1]] = avg;
            output[[y, x, 2]] = avg;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}
