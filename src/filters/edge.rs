//! Sobel edge detection.
//!
//! Produces a gradient-magnitude map from the grayscale version of the
//! input. The cel-shading combiner reuses this to find outline pixels.

use ndarray::{Array3, ArrayView3};

use super::grayscale::grayscale_rgba;

/// Horizontal Sobel kernel.
const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical Sobel kernel.
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Compute the Sobel gradient magnitude of an RGBA image.
///
/// The input is grayscaled internally; both 3x3 kernels are applied to
/// every interior pixel and the combined magnitude `sqrt(gx^2 + gy^2)`
/// is written to all three color channels, clamped to 0-255.
///
/// Border pixels get no kernel and stay at zero magnitude, so images
/// smaller than 3x3 come out all black. Alpha is forced to 255
/// everywhere; edge maps are always opaque.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// Opaque grayscale-valued edge-magnitude image, same dimensions
pub fn sobel_magnitude(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    let gray = grayscale_rgba(input);

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut gx = 0i32;
            let mut gy = 0i32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let lum = gray[[y + ky - 1, x + kx - 1, 0]] as i32;
                    gx += lum * SOBEL_X[ky][kx];
                    gy += lum * SOBEL_Y[ky][kx];
                }
            }

            let magnitude = ((gx * gx + gy * gy) as f32).sqrt().min(255.0) as u8;

            output[[y, x, 0]] = magnitude;
            output[[y, x, 1]] = magnitude;
            output[[y, x, 2]] = magnitude;
        }
    }

    // Opaque everywhere, including the zero-magnitude border
    for y in 0..height {
        for x in 0..width {
            output[[y, x, 3]] = 255;
        }
    }

    output
}
