//! Validated RGBA8 raster buffer.
//!
//! `PixelBuffer` is the boundary type between the engine and its
//! collaborators (decoders, encoders, display surfaces). Internally the
//! raster is an `ndarray` array of shape `(height, width, 4)`, which is
//! what every filter kernel consumes as a view and produces fresh.
//!
//! Construction validates shape once; after that every filter can rely
//! on a well-formed 4-channel raster and stays total.

use ndarray::{Array3, ArrayView3};

use crate::error::EffectError;

/// Number of bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Fixed-size RGBA8 raster with validated dimensions.
///
/// Pixels are row-major, top-to-bottom, 4 bytes per pixel. The invariant
/// `len == width * height * 4` holds for the lifetime of the buffer.
/// Filters never mutate a `PixelBuffer` in place; every effect reads the
/// source and allocates a new output raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Build a buffer from decoded image data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels, must be > 0
    /// * `height` - Image height in pixels, must be > 0
    /// * `pixels` - Flat RGBA bytes, row-major, exactly `width * height * 4` long
    ///
    /// # Errors
    /// `EffectError::InvalidDimensions` if either axis is zero or the
    /// byte length does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EffectError> {
        let expected = width as usize * height as usize * CHANNELS;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(EffectError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
                expected,
            });
        }
        let data = Array3::from_shape_vec((height as usize, width as usize, CHANNELS), pixels)
            .map_err(|_| EffectError::InvalidDimensions {
                width,
                height,
                len: 0,
                expected,
            })?;
        Ok(Self { data })
    }

    /// Wrap a filter output array.
    ///
    /// Filter kernels preserve the shape of their input, so this is the
    /// internal path from `Array3<u8>` back to the boundary type. The
    /// array must be `(height, width, 4)` with non-zero spatial axes.
    pub(crate) fn from_array(data: Array3<u8>) -> Self {
        debug_assert!(data.dim().0 > 0 && data.dim().1 > 0 && data.dim().2 == CHANNELS);
        Self { data }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    /// Read-only view for filter kernels, shape `(height, width, 4)`.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// RGBA value at `(x, y)`. Panics if out of bounds; intended for
    /// inspection and tests, not per-pixel processing.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let (y, x) = (y as usize, x as usize);
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
            self.data[[y, x, 3]],
        ]
    }

    /// Consume the buffer, returning `(width, height, rgba_bytes)` for
    /// the encoding/display collaborator.
    pub fn into_raw(self) -> (u32, u32, Vec<u8>) {
        let (w, h) = (self.width(), self.height());
        let (vec, _offset) = self.data.into_raw_vec_and_offset();
        (w, h, vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_valid() {
        let buf = PixelBuffer::from_raw(2, 3, vec![0u8; 2 * 3 * 4]).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 3);
    }

    #[test]
    fn test_from_raw_rejects_zero_width() {
        let err = PixelBuffer::from_raw(0, 3, vec![]).unwrap_err();
        assert!(matches!(err, EffectError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_raw_rejects_zero_height() {
        let err = PixelBuffer::from_raw(3, 0, vec![]).unwrap_err();
        assert!(matches!(err, EffectError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_raw_rejects_length_mismatch() {
        let err = PixelBuffer::from_raw(2, 2, vec![0u8; 15]).unwrap_err();
        assert!(matches!(err, EffectError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_round_trip_preserves_bytes() {
        let bytes: Vec<u8> = (0..16).collect();
        let buf = PixelBuffer::from_raw(2, 2, bytes.clone()).unwrap();
        let (w, h, raw) = buf.into_raw();
        assert_eq!((w, h), (2, 2));
        assert_eq!(raw, bytes);
    }

    #[test]
    fn test_pixel_accessor_is_row_major() {
        let mut bytes = vec![0u8; 2 * 2 * 4];
        // Pixel (1, 0) = second pixel of first row
        bytes[4..8].copy_from_slice(&[10, 20, 30, 40]);
        let buf = PixelBuffer::from_raw(2, 2, bytes).unwrap();
        assert_eq!(buf.pixel(1, 0), [10, 20, 30, 40]);
    }
}
