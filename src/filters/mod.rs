//! Filter kernels for the stylized effect pipeline.
//!
//! Every kernel here is a pure function over an RGBA raster: it takes an
//! `ArrayView3<u8>` of shape `(height, width, 4)` and allocates a fresh
//! output of identical dimensions (the ASCII renderer produces a text
//! grid instead). Inputs are never mutated, so repeated effect selection
//! always works from the untouched source.
//!
//! Per-pixel arithmetic is total: channel math clamps to 0-255 and
//! parameters arrive pre-clamped from the dispatcher, so no kernel can
//! panic mid-image.
//!
//! ## Filter categories
//!
//! - **Shared preprocessing**: [`grayscale`] (also a user-facing effect)
//! - **Convolution**: [`edge`] (Sobel magnitude), [`blur`] (Gaussian)
//! - **Tone reduction**: [`stylize`] (posterize, solarize, pixelate),
//!   [`dither`] (4x4 Bayer), [`cel_shade`]
//! - **Tone mapping**: [`tone`] (sepia, duotone)
//! - **Spatial restyling**: [`halftone`]
//! - **Text output**: [`ascii`]

pub mod ascii;
pub mod blur;
pub mod cel_shade;
pub mod dither;
pub mod edge;
pub mod grayscale;
pub mod halftone;
pub mod stylize;
pub mod tone;
