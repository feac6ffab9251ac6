//! Ordered (Bayer) dithering.
//!
//! Binarizes the image against a fixed, spatially periodic 4x4 threshold
//! matrix. No randomness and no error diffusion: the same input always
//! produces the same output, and errors never propagate between pixels.

use ndarray::{Array3, ArrayView3};

/// 4x4 Bayer threshold matrix, indexed `[y % 4][x % 4]`.
/// Entries are scaled by 16 to form the luminance threshold.
const BAYER_4X4: [[u32; 4]; 4] = [
    [1, 9, 3, 11],
    [13, 5, 15, 7],
    [4, 12, 2, 10],
    [16, 8, 14, 6],
];

/// Rec.601 luma coefficients used for the dither decision.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Apply 4x4 ordered dithering, producing a pure black/white image.
///
/// For each pixel, luminance `Y = 0.299 R + 0.587 G + 0.114 B` is
/// compared against `BAYER_4X4[y % 4][x % 4] * 16`; the output pixel is
/// white when `Y >= threshold`, black otherwise. Every output pixel is
/// exactly `(0,0,0,255)` or `(255,255,255,255)`.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// Binary black/white image, same dimensions, fully opaque
pub fn bayer_dither(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;
            let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;

            let threshold = (BAYER_4X4[y % 4][x % 4] * 16) as f32;
            let value = if luma < threshold { 0 } else { 255 };

            output[[y, x, 0]] = value;
            output[[y, x, 1]] = value;
            output[[y, x, 2]] = value;
            output[[y, x, 3]] = 255;
        }
    }

    output
}
