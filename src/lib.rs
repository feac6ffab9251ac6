//! Deterministic stylized image filter engine.
//!
//! Transforms a decoded RGBA8 raster into one of several stylized
//! variants: grayscale, Gaussian blur, Bayer dither, cel shading,
//! halftone, solarize, posterize, sepia, pixelate, duotone, or ASCII
//! art. Surrounding application concerns (decoding, display, export)
//! are external collaborators; this crate is pure pixel math.
//!
//! ## Model
//!
//! - [`PixelBuffer`] is the validated boundary type: width, height and a
//!   row-major RGBA byte buffer with `len == width * height * 4`.
//! - [`EffectRequest`] selects exactly one effect plus its parameters;
//!   [`apply`] dispatches it as a pure function from source to a fresh
//!   output. Inputs are never mutated in place.
//! - [`EffectSession`] holds a source image and the two-state selection
//!   model: idle passthrough, or one applied effect recomputed from the
//!   untouched source on every selection. Effects never chain.
//! - The ASCII effect alone produces an [`AsciiGrid`] instead of pixels.
//!
//! ## Example
//!
//! ```
//! use image_toolkit::{apply, EffectRequest, PixelBuffer};
//!
//! let source = PixelBuffer::from_raw(2, 2, vec![128; 2 * 2 * 4])?;
//! let output = apply(&source, &EffectRequest::Posterize { levels: 4 })?;
//! let image = output.as_image().unwrap();
//! assert_eq!(image.pixel(0, 0), [170, 170, 170, 128]);
//! # Ok::<(), image_toolkit::EffectError>(())
//! ```
//!
//! Each effect invocation is synchronous and operates over a bounded
//! in-memory buffer; the halftone and blur kernels parallelize
//! internally over independent cells/rows via rayon.

pub mod buffer;
pub mod effect;
pub mod error;
pub mod filters;
pub mod palette;

pub use buffer::PixelBuffer;
pub use effect::{apply, EffectOutput, EffectRequest, EffectSession};
pub use error::EffectError;
pub use filters::ascii::AsciiGrid;
pub use palette::PaletteExtractor;
