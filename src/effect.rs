//! Effect selection and dispatch.
//!
//! [`EffectRequest`] is the tagged-variant selection surface: one
//! variant per effect, carrying that effect's parameters. [`apply`]
//! dispatches a request to exactly one filter kernel. [`EffectSession`]
//! wraps a decoded source buffer and implements the two-state selection
//! model: idle (passthrough of the source) or one applied effect,
//! always recomputed from the untouched source.

use std::str::FromStr;

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::EffectError;
use crate::filters::ascii::{self, AsciiGrid, DEFAULT_RAMP};
use crate::filters::blur::gaussian_blur;
use crate::filters::cel_shade::cel_shade;
use crate::filters::dither::bayer_dither;
use crate::filters::grayscale::grayscale_rgba;
use crate::filters::halftone::halftone;
use crate::filters::stylize::{pixelate, posterize, solarize};
use crate::filters::tone::{duotone, sepia, DUOTONE_DARK, DUOTONE_LIGHT};
use crate::palette::PaletteExtractor;

/// Default blur radius when the effect is selected without parameters.
pub const DEFAULT_BLUR_RADIUS: f32 = 10.0;
/// Default posterization level count.
pub const DEFAULT_POSTERIZE_LEVELS: u8 = 4;
/// Default halftone cell edge length in pixels.
pub const DEFAULT_HALFTONE_CELL: u32 = 10;
/// Default pixelation block edge length in pixels.
pub const DEFAULT_PIXELATE_BLOCK: u32 = 10;

/// One effect selection with its parameters.
///
/// Out-of-domain numeric parameters are clamped by the kernels (level
/// count to >= 2, cell and block sizes to >= 1, blur radius to 0-50);
/// only an empty ASCII ramp is rejected outright.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectRequest {
    /// Channel-average grayscale.
    Grayscale,
    /// Gaussian blur with the given radius (0-50 pixels).
    Blur { radius: f32 },
    /// 4x4 Bayer ordered dither to pure black/white.
    Dither,
    /// Quantized colors with black outlines.
    CelShading,
    /// Black dots on white, cell-averaged.
    Halftone { cell_size: u32 },
    /// Invert channels below mid-intensity.
    Solarize,
    /// Reduce each channel to `levels` intensities.
    Posterize { levels: u8 },
    /// Classic sepia channel mix.
    Sepia,
    /// Flat-fill square blocks from their top-left sample.
    Pixelate { block_size: u32 },
    /// Map brightness onto a two-color gradient.
    Duotone { dark: [u8; 3], light: [u8; 3] },
    /// Character-ramp text rendering.
    Ascii { ramp: String },
}

impl FromStr for EffectRequest {
    type Err = EffectError;

    /// Parse an effect identifier into a request with default
    /// parameters. Unknown identifiers are rejected; no default effect
    /// is substituted.
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "monochrome" => Ok(Self::Grayscale),
            "blur" => Ok(Self::Blur {
                radius: DEFAULT_BLUR_RADIUS,
            }),
            "dithering" => Ok(Self::Dither),
            "celShading" => Ok(Self::CelShading),
            "halftone" => Ok(Self::Halftone {
                cell_size: DEFAULT_HALFTONE_CELL,
            }),
            "solarization" => Ok(Self::Solarize),
            "posterization" => Ok(Self::Posterize {
                levels: DEFAULT_POSTERIZE_LEVELS,
            }),
            "sepia" => Ok(Self::Sepia),
            "pixelization" => Ok(Self::Pixelate {
                block_size: DEFAULT_PIXELATE_BLOCK,
            }),
            "duotone" => Ok(Self::Duotone {
                dark: DUOTONE_DARK,
                light: DUOTONE_LIGHT,
            }),
            "asciiArt" => Ok(Self::Ascii {
                ramp: DEFAULT_RAMP.to_string(),
            }),
            other => Err(EffectError::UnsupportedEffect(other.to_string())),
        }
    }
}

/// Result of one effect invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectOutput {
    /// A new pixel buffer of identical dimensions to the source.
    Image(PixelBuffer),
    /// Text grid from the ASCII effect.
    Text(AsciiGrid),
}

impl EffectOutput {
    /// The pixel buffer, if this output is an image.
    pub fn as_image(&self) -> Option<&PixelBuffer> {
        match self {
            Self::Image(buffer) => Some(buffer),
            Self::Text(_) => None,
        }
    }

    /// The text grid, if this output is ASCII art.
    pub fn as_text(&self) -> Option<&AsciiGrid> {
        match self {
            Self::Image(_) => None,
            Self::Text(grid) => Some(grid),
        }
    }
}

/// Run one effect against a source buffer.
///
/// Reads the source and allocates a fresh output; the source is never
/// mutated. Validation (the empty-ramp check) happens before any pixel
/// work, so a rejection never leaves a partial buffer behind.
pub fn apply(source: &PixelBuffer, request: &EffectRequest) -> Result<EffectOutput, EffectError> {
    debug!(
        "applying {:?} to {}x{} source",
        request,
        source.width(),
        source.height()
    );

    let view = source.view();
    let image = match request {
        EffectRequest::Grayscale => grayscale_rgba(view),
        EffectRequest::Blur { radius } => gaussian_blur(view, *radius),
        EffectRequest::Dither => bayer_dither(view),
        EffectRequest::CelShading => cel_shade(view),
        EffectRequest::Halftone { cell_size } => halftone(view, *cell_size),
        EffectRequest::Solarize => solarize(view),
        EffectRequest::Posterize { levels } => posterize(view, *levels),
        EffectRequest::Sepia => sepia(view),
        EffectRequest::Pixelate { block_size } => pixelate(view, *block_size),
        EffectRequest::Duotone { dark, light } => duotone(view, *dark, *light),
        EffectRequest::Ascii { ramp } => {
            let grid = ascii::ascii_render(view, ramp)?;
            return Ok(EffectOutput::Text(grid));
        }
    };
    Ok(EffectOutput::Image(PixelBuffer::from_array(image)))
}

/// Two-state effect selection over one decoded source image.
///
/// Either no effect is selected (idle, output is a passthrough copy of
/// the source) or exactly one is. Selecting an effect always recomputes
/// from the original source: switching from halftone to sepia applies
/// sepia to the untouched image, never to the halftoned result. There
/// is deliberately no effect chaining.
#[derive(Debug, Clone)]
pub struct EffectSession {
    source: PixelBuffer,
    selected: Option<EffectRequest>,
}

impl EffectSession {
    /// Start a session over a decoded source image.
    pub fn new(source: PixelBuffer) -> Self {
        Self {
            source,
            selected: None,
        }
    }

    /// The untouched source buffer.
    pub fn source(&self) -> &PixelBuffer {
        &self.source
    }

    /// The currently selected effect, if any.
    pub fn selected(&self) -> Option<&EffectRequest> {
        self.selected.as_ref()
    }

    /// Select an effect and render it from the untouched source.
    ///
    /// On rejection (empty ramp) the previous selection is kept.
    pub fn select(&mut self, request: EffectRequest) -> Result<EffectOutput, EffectError> {
        let output = apply(&self.source, &request)?;
        debug!("effect selected: {request:?}");
        self.selected = Some(request);
        Ok(output)
    }

    /// Drop the current selection, returning to the idle state.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Render the current state: the selected effect, or a passthrough
    /// copy of the source when idle.
    pub fn render(&self) -> Result<EffectOutput, EffectError> {
        match &self.selected {
            Some(request) => apply(&self.source, request),
            None => Ok(EffectOutput::Image(self.source.clone())),
        }
    }

    /// Forward the untouched source to a palette extractor.
    ///
    /// The extraction algorithm is an external collaborator; the engine
    /// only hands over the buffer and the requested color count.
    pub fn palette_with<E: PaletteExtractor>(&self, extractor: &E, count: usize) -> Vec<String> {
        extractor.extract(&self.source, count)
    }
}
