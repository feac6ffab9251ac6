//! Error taxonomy for the filter engine.
//!
//! Rejections happen before any pixel work begins; no effect ever
//! returns a partially written buffer. Out-of-domain numeric parameters
//! (level counts, cell sizes, blur radii) are clamped rather than
//! rejected, so they never appear here.

use thiserror::Error;

/// Errors surfaced by buffer construction and effect dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    /// Source dimensions are zero, or the byte length does not match
    /// `width * height * 4`.
    #[error("invalid image dimensions: {width}x{height} with {len} bytes (expected {expected})")]
    InvalidDimensions {
        width: u32,
        height: u32,
        len: usize,
        expected: usize,
    },

    /// The ASCII character ramp is empty. There is no sane default
    /// character to substitute, so this is rejected outright.
    #[error("ASCII character ramp must not be empty")]
    EmptyRamp,

    /// An effect identifier that the dispatcher does not recognize.
    /// No default effect is silently substituted.
    #[error("unsupported effect: {0:?}")]
    UnsupportedEffect(String),
}
