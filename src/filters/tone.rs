//! Tone-mapping filters: sepia and duotone.

use ndarray::{Array3, ArrayView3};

/// Default duotone shadow color (dark navy).
pub const DUOTONE_DARK: [u8; 3] = [0, 0, 100];
/// Default duotone highlight color (pale yellow).
pub const DUOTONE_LIGHT: [u8; 3] = [255, 255, 155];

// ============================================================================
// Sepia
// ============================================================================

/// Apply the classic sepia channel-mixing matrix.
///
/// Each output channel is a fixed weighted sum of the input RGB,
/// clamped to 255:
///
/// ```text
/// R' = 0.393 R + 0.769 G + 0.189 B
/// G' = 0.349 R + 0.686 G + 0.168 B
/// B' = 0.272 R + 0.534 G + 0.131 B
/// ```
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// Sepia-toned image, same dimensions, alpha preserved
pub fn sepia(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            output[[y, x, 0]] = (0.393 * r + 0.769 * g + 0.189 * b).round().min(255.0) as u8;
            output[[y, x, 1]] = (0.349 * r + 0.686 * g + 0.168 * b).round().min(255.0) as u8;
            output[[y, x, 2]] = (0.272 * r + 0.534 * g + 0.131 * b).round().min(255.0) as u8;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

// ============================================================================
// Duotone
// ============================================================================

/// Map the image onto a two-color gradient.
///
/// Per pixel, `t = (R + G + B) / 3 / 255` picks the position between the
/// `dark` and `light` colors; each output channel is
/// `dark + (light - dark) * t`.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
/// * `dark` - RGB triple mapped to black input
/// * `light` - RGB triple mapped to white input
///
/// # Returns
/// Duotone image, same dimensions, alpha preserved
pub fn duotone(input: ArrayView3<u8>, dark: [u8; 3], light: [u8; 3]) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;
            let t = (r + g + b) / 3.0 / 255.0;

            for c in 0..3 {
                let d = dark[c] as f32;
                let l = light[c] as f32;
                output[[y, x, c]] = (d + (l - d) * t).round().clamp(0.0, 255.0) as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}
