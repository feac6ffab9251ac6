//! Gaussian blur.
//!
//! Separable two-pass convolution with clamp-to-edge sampling, working
//! in f32 for precision. Rows are independent within each pass, so both
//! passes run row-parallel over the flat pixel buffer.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

/// Largest accepted blur radius; larger requests are clamped.
pub const MAX_BLUR_RADIUS: f32 = 50.0;

/// Generate a normalized 1D Gaussian kernel.
///
/// Kernel size is 6 sigma (99.7% of the distribution), forced odd.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// Normalized kernel weights
pub fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }

    let kernel_size = ((sigma * 6.0).ceil() as usize) | 1;
    let half = kernel_size / 2;

    let mut kernel: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Apply Gaussian blur to an RGBA image.
///
/// All four channels are blurred, alpha included. A radius of 0 returns
/// an identical copy; radii are clamped to 0-50. Sampling clamps to the
/// image edge, so borders do not darken.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
/// * `radius` - Blur radius in pixels (sigma is radius / 2)
///
/// # Returns
/// Blurred image, same dimensions
pub fn gaussian_blur(input: ArrayView3<u8>, radius: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();

    let radius = if radius.is_finite() {
        radius.clamp(0.0, MAX_BLUR_RADIUS)
    } else {
        0.0
    };
    if radius == 0.0 {
        return input.to_owned();
    }

    let kernel = gaussian_kernel_1d(radius / 2.0);
    let half = kernel.len() / 2;
    let stride = width * 4;

    let src: Vec<f32> = input.iter().map(|&v| v as f32).collect();
    let mut temp = vec![0.0f32; src.len()];

    // Horizontal pass
    temp.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let src_row = &src[y * stride..(y + 1) * stride];
        for x in 0..width {
            for c in 0..4 {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = (x as isize + ki as isize - half as isize)
                        .clamp(0, width as isize - 1) as usize;
                    sum += src_row[sx * 4 + c] * kv;
                }
                row[x * 4 + c] = sum;
            }
        }
    });

    // Vertical pass
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        for x in 0..width {
            for c in 0..4 {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sy = (y as isize + ki as isize - half as isize)
                        .clamp(0, height as isize - 1) as usize;
                    sum += temp[sy * stride + x * 4 + c] * kv;
                }
                row[x * 4 + c] = sum.clamp(0.0, 255.0).round() as u8;
            }
        }
    });

    Array3::from_shape_vec((height, width, 4), out).expect("output sized to input shape")
}
