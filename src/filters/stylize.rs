//! Stylize filters: posterize, solarize, pixelate.
//!
//! Independent per-pixel / per-block arithmetic transforms. Alpha is
//! passed through untouched by all three.

use ndarray::{Array3, ArrayView3};

// ============================================================================
// Posterize
// ============================================================================

/// Reduce each channel to `levels` discrete intensity values.
///
/// For each channel value `v`, with `step = 255 / (levels - 1)`, the
/// output is `round(round(v / step) * step)`. Monotonic and idempotent:
/// re-quantizing at the same level count is a no-op.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
/// * `levels` - Levels per channel; values below 2 are clamped to 2
///
/// # Returns
/// Posterized image, same dimensions, alpha preserved
pub fn posterize(input: ArrayView3<u8>, levels: u8) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    let levels = levels.max(2);
    let step = 255.0 / (levels - 1) as f32;

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let v = input[[y, x, c]] as f32;
                output[[y, x, c]] = ((v / step).round() * step).round().clamp(0.0, 255.0) as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

// ============================================================================
// Solarize
// ============================================================================

/// Channel values below the solarize threshold are inverted.
const SOLARIZE_THRESHOLD: u8 = 128;

/// Apply a solarize effect.
///
/// Each channel below 128 is inverted (`255 - v`); channels at or above
/// the threshold pass through. Because channels are treated
/// independently, hue can shift as well as tone.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// Solarized image, same dimensions, alpha preserved
pub fn solarize(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let v = input[[y, x, c]];
                output[[y, x, c]] = if v < SOLARIZE_THRESHOLD { 255 - v } else { v };
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

// ============================================================================
// Pixelate
// ============================================================================

/// Flat-fill the image in square blocks.
///
/// The image is tiled into `block_size` x `block_size` blocks; each
/// block is filled with the color of its top-left pixel (a nearest-sample
/// policy, deliberately not a block average). Blocks at the right and
/// bottom edges are clipped to the image bounds.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
/// * `block_size` - Block edge length in pixels; 0 is clamped to 1
///
/// # Returns
/// Pixelated image, same dimensions
pub fn pixelate(input: ArrayView3<u8>, block_size: u32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    let block = block_size.max(1) as usize;

    for by in (0..height).step_by(block) {
        for bx in (0..width).step_by(block) {
            let sample = [
                input[[by, bx, 0]],
                input[[by, bx, 1]],
                input[[by, bx, 2]],
                input[[by, bx, 3]],
            ];

            for y in by..(by + block).min(height) {
                for x in bx..(bx + block).min(width) {
                    for c in 0..4 {
                        output[[y, x, c]] = sample[c];
                    }
                }
            }
        }
    }

    output
}
