//! ASCII art rendering.
//!
//! Downsamples brightness on a coarse grid and maps each sample onto a
//! character ramp ordered darkest to lightest. The vertical stride is
//! twice the horizontal one to compensate for character cell aspect
//! ratio. This is the only effect that produces text instead of pixels.

use std::fmt;

use ndarray::ArrayView3;

use crate::error::EffectError;

use super::grayscale::grayscale_rgba;

/// Default character ramp, darkest to lightest.
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Rows are sampled every 8 pixels.
const STRIDE_Y: usize = 8;
/// Columns are sampled every 4 pixels.
const STRIDE_X: usize = 4;

/// Text grid produced by the ASCII effect.
///
/// One string per sampled row. Consumed directly for display or
/// clipboard copy; never converted back into a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    lines: Vec<String>,
}

impl AsciiGrid {
    /// Sampled rows, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render an RGBA image as ASCII art.
///
/// The source is grayscaled, then sampled every 8 rows and every 4
/// columns. A sample of brightness `g` maps to the ramp character at
/// index `floor(g / 255 * (ramp_len - 1))`.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
/// * `ramp` - Characters ordered darkest to lightest, must be non-empty
///
/// # Errors
/// `EffectError::EmptyRamp` if `ramp` has no characters.
pub fn ascii_render(input: ArrayView3<u8>, ramp: &str) -> Result<AsciiGrid, EffectError> {
    let chars: Vec<char> = ramp.chars().collect();
    if chars.is_empty() {
        return Err(EffectError::EmptyRamp);
    }

    let (height, width, _) = input.dim();
    let gray = grayscale_rgba(input);

    let mut lines = Vec::with_capacity(height.div_ceil(STRIDE_Y));
    for y in (0..height).step_by(STRIDE_Y) {
        let mut line = String::with_capacity(width.div_ceil(STRIDE_X));
        for x in (0..width).step_by(STRIDE_X) {
            let brightness = gray[[y, x, 0]] as f32 / 255.0;
            let index = (brightness * (chars.len() - 1) as f32).floor() as usize;
            line.push(chars[index]);
        }
        lines.push(line);
    }

    Ok(AsciiGrid { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

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
    fn test_ascii_white_16x16_default_ramp() {
        // ceil(16/8) = 2 lines of ceil(16/4) = 4 spaces each
        let grid = ascii_render(solid(16, 16, 255).view(), DEFAULT_RAMP).unwrap();

        assert_eq!(grid.lines(), &["    ".to_string(), "    ".to_string()]);
    }

    #[test]
    fn test_ascii_black_maps_to_darkest_character() {
        let grid = ascii_render(solid(8, 4, 0).view(), DEFAULT_RAMP).unwrap();

        assert_eq!(grid.lines(), &["@".to_string()]);
    }

    #[test]
    fn test_ascii_empty_ramp_is_rejected() {
        let err = ascii_render(solid(4, 4, 0).view(), "").unwrap_err();

        assert_eq!(err, EffectError::EmptyRamp);
    }

    #[test]
    fn test_ascii_single_char_ramp() {
        let grid = ascii_render(solid(8, 8, 200).view(), "#").unwrap();

        assert_eq!(grid.lines(), &["##".to_string()]);
    }

    #[test]
    fn test_ascii_index_never_reaches_ramp_length() {
        // brightness 1.0 maps to the last index, not one past it
        let grid = ascii_render(solid(1, 1, 255).view(), "ab").unwrap();

        assert_eq!(grid.lines(), &["b".to_string()]);
    }

    #[test]
    fn test_ascii_display_joins_lines() {
        let grid = ascii_render(solid(16, 8, 0).view(), "@ ").unwrap();

        assert_eq!(grid.to_string(), "@@\n@@\n");
    }
}
