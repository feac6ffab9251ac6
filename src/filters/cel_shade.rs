//! Cel shading: quantized colors with painted outlines.

use ndarray::{Array3, ArrayView3};

use super::edge::sobel_magnitude;
use super::stylize::posterize;

/// Quantization level count used for the flat color regions.
const CEL_LEVELS: u8 = 4;
/// Edge magnitudes above this become outline pixels.
const EDGE_THRESHOLD: u8 = 128;

/// Apply a cel-shading (cartoon) effect.
///
/// Runs the quantizer at 4 levels and Sobel edge detection independently
/// on the same source, then merges: pixels whose edge magnitude exceeds
/// 128 are painted black, everything else takes the quantized color.
/// Alpha is forced to 255.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// Cel-shaded image, same dimensions, fully opaque
pub fn cel_shade(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    let quantized = posterize(input, CEL_LEVELS);
    let edges = sobel_magnitude(input);

    for y in 0..height {
        for x in 0..width {
            if edges[[y, x, 0]] > EDGE_THRESHOLD {
                output[[y, x, 0]] = 0;
                output[[y, x, 1]] = 0;
                output[[y, x, 2]] = 0;
            } else {
                output[[y, x, 0]] = quantized[[y, x, 0]];
                output[[y, x, 1]] = quantized[[y, x, 1]];
                output[[y, x, 2]] = quantized[[y, x, 2]];
            }
            output[[y, x, 3]] = 255;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cel_shade_flat_region_is_quantized() {
        let mut img = Array3::<u8>::zeros((5, 5, 4));
        for y in 0..5 {
            for x in 0..5 {
                img[[y, x, 0]] = 128;
                img[[y, x, 1]] = 128;
                img[[y, x, 2]] = 128;
                img[[y, x, 3]] = 255;
            }
        }

        let result = cel_shade(img.view());

        // No edges on a flat image; 128 quantizes to 170 at 4 levels
        assert_eq!(result[[2, 2, 0]], 170);
        assert_eq!(result[[2, 2, 3]], 255);
    }

    #[test]
    fn test_cel_shade_paints_strong_edges_black() {
        let mut img = Array3::<u8>::zeros((5, 5, 4));
        // Hard vertical black/white boundary produces magnitudes > 128
        for y in 0..5 {
            for x in 2..5 {
                img[[y, x, 0]] = 255;
                img[[y, x, 1]] = 255;
                img[[y, x, 2]] = 255;
            }
            for x in 0..5 {
                img[[y, x, 3]] = 255;
            }
        }

        let result = cel_shade(img.view());

        // Interior pixel adjacent to the boundary is an outline pixel,
        // even though its quantized color would be white
        assert_eq!(result[[2, 2, 0]], 0);
        assert_eq!(result[[2, 2, 1]], 0);
        assert_eq!(result[[2, 2, 2]], 0);
    }

    #[test]
    fn test_cel_shade_is_opaque() {
        let mut img = Array3::<u8>::zeros((4, 4, 4));
        img[[1, 1, 3]] = 3;

        let result = cel_shade(img.view());

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }
}
