//! Dominant-color palette extraction contract.
//!
//! Palette extraction is an external, swappable collaborator: the engine
//! forwards the untouched source buffer and a requested color count, and
//! displays whatever hex strings come back. The algorithm itself (median
//! cut, octree, k-means, ...) is deliberately not part of this crate.

use crate::buffer::PixelBuffer;

/// Contract for an external dominant-color extractor.
pub trait PaletteExtractor {
    /// Extract up to `count` dominant colors from `image`, returned as
    /// hex-encoded strings (e.g. `"#1a2b3c"`).
    fn extract(&self, image: &PixelBuffer, count: usize) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectSession;

    /// Stand-in extractor: returns the first pixel's color `count` times.
    struct FirstPixel;

    impl PaletteExtractor for FirstPixel {
        fn extract(&self, image: &PixelBuffer, count: usize) -> Vec<String> {
            let [r, g, b, _] = image.pixel(0, 0);
            (0..count).map(|_| format!("#{r:02x}{g:02x}{b:02x}")).collect()
        }
    }

    #[test]
    fn test_session_forwards_source_and_count() {
        let buf = PixelBuffer::from_raw(1, 1, vec![0x12, 0x34, 0x56, 0xff]).unwrap();
        let session = EffectSession::new(buf);

        let palette = session.palette_with(&FirstPixel, 3);

        assert_eq!(palette, vec!["#123456"; 3]);
    }
}
