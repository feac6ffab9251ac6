//! Halftone rendering.
//!
//! Tiles the image into fixed-size cells and draws one black dot per
//! cell on a white canvas. Dot radius shrinks with cell brightness:
//! `radius = (cell / 2) * (1 - mean / 255)`. Cell statistics are
//! independent of each other, so they are computed in parallel.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use super::grayscale::grayscale_rgba;

/// Render a halftone version of the image.
///
/// The image is tiled into non-overlapping `cell_size` x `cell_size`
/// cells; cells at the right and bottom edges are clipped to the buffer
/// bounds rather than padded. Each cell contributes a filled black
/// circle centered at the nominal cell center, on an otherwise white,
/// fully opaque canvas. A luminance-0 cell yields a dot filling the
/// cell; a luminance-255 cell yields no visible dot.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
/// * `cell_size` - Cell edge length in pixels; 0 is clamped to 1
///
/// # Returns
/// Black-dots-on-white image, same dimensions, fully opaque
pub fn halftone(input: ArrayView3<u8>, cell_size: u32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let cell = cell_size.max(1) as usize;

    let gray = grayscale_rgba(input);

    // One entry per cell origin, row-major over the cell grid
    let origins: Vec<(usize, usize)> = (0..height)
        .step_by(cell)
        .flat_map(|cy| (0..width).step_by(cell).map(move |cx| (cy, cx)))
        .collect();

    // Mean brightness per cell; clipped cells average over fewer pixels
    let dots: Vec<(usize, usize, f32)> = origins
        .par_iter()
        .map(|&(cy, cx)| {
            let mut total = 0u32;
            let mut count = 0u32;
            for y in cy..(cy + cell).min(height) {
                for x in cx..(cx + cell).min(width) {
                    total += gray[[y, x, 0]] as u32;
                    count += 1;
                }
            }
            let mean = total as f32 / count as f32;
            let radius = (cell as f32 / 2.0) * (1.0 - mean / 255.0);
            (cy, cx, radius)
        })
        .collect();

    // White opaque canvas
    let mut output = Array3::<u8>::from_elem((height, width, 4), 255);

    for (cy, cx, radius) in dots {
        if radius <= 0.0 {
            continue;
        }
        let center_y = cy as f32 + cell as f32 / 2.0;
        let center_x = cx as f32 + cell as f32 / 2.0;

        // Scan the dot's bounding box, clipped to the canvas
        let y0 = (center_y - radius).floor().max(0.0) as usize;
        let y1 = ((center_y + radius).ceil() as usize).min(height);
        let x0 = (center_x - radius).floor().max(0.0) as usize;
        let x1 = ((center_x + radius).ceil() as usize).min(width);

        for y in y0..y1 {
            for x in x0..x1 {
                let dy = y as f32 + 0.5 - center_y;
                let dx = x as f32 + 0.5 - center_x;
                if dx * dx + dy * dy <= radius * radius {
                    output[[y, x, 0]] = 0;
                    output[[y, x, 1]] = 0;
                    output[[y, x, 2]] = 0;
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(height: usize, width: usize, rgb: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((height, width, 4));
        for y in 0..height {
            for x in 0..width {
                img[[y, x, 0]] = rgb;
                img[[y, x, 1]] = rgb;
                img[[y, x, 2]] = rgb;
                img[[y, x, 3]] = 255;
            }
        }
        img
    }

    #[test]
    fn test_halftone_white_image_stays_white() {
        let result = halftone(solid(10, 10, 255).view(), 5);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(result[[y, x, 0]], 255);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_halftone_black_image_draws_full_dots() {
        // radius = cell/2, so the cell centers must be black
        let result = halftone(solid(8, 8, 0).view(), 4);

        assert_eq!(result[[2, 2, 0]], 0);
        assert_eq!(result[[2, 6, 0]], 0);
        assert_eq!(result[[6, 2, 0]], 0);
        assert_eq!(result[[6, 6, 0]], 0);
        // Cell corners lie outside the inscribed circle and stay white
        assert_eq!(result[[0, 0, 0]], 255);
    }

    #[test]
    fn test_halftone_preserves_dimensions() {
        // 7x5 with cell 3 leaves partial cells on both edges
        let result = halftone(solid(5, 7, 90).view(), 3);

        assert_eq!(result.dim(), (5, 7, 4));
    }

    #[test]
    fn test_halftone_darker_cells_get_bigger_dots() {
        let mut img = solid(8, 16, 230);
        // Left cell dark, right cell light
        for y in 0..8 {
            for x in 0..8 {
                img[[y, x, 0]] = 20;
                img[[y, x, 1]] = 20;
                img[[y, x, 2]] = 20;
            }
        }

        let result = halftone(img.view(), 8);

        let count_black = |x_range: std::ops::Range<usize>| {
            (0..8)
                .flat_map(|y| x_range.clone().map(move |x| (y, x)))
                .filter(|&(y, x)| result[[y, x, 0]] == 0)
                .count()
        };
        assert!(count_black(0..8) > count_black(8..16));
    }

    #[test]
    fn test_halftone_cell_size_zero_is_clamped() {
        let result = halftone(solid(3, 3, 0).view(), 0);

        assert_eq!(result.dim(), (3, 3, 4));
        // 1x1 cells of a black image paint every pixel
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(result[[y, x, 0]], 0);
            }
        }
    }

    #[test]
    fn test_halftone_output_is_monochrome_opaque() {
        let result = halftone(solid(9, 9, 128).view(), 3);

        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(result[[y, x, 0]], result[[y, x, 1]]);
                assert_eq!(result[[y, x, 1]], result[[y, x, 2]]);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }
}
