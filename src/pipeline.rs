//! Full transform pipeline
//!
//! Composes the stages over a whole image:
//!
//! ```text
//! RGB -> ColorSpaceConverter -> YCbCr (full resolution)
//!     -> ChromaSubsampler    -> meta grid (quarter element count)
//!     -> ChromaUpsampler     -> YCbCr (full resolution, chroma averaged)
//!     -> InverseConverter    -> RGB
//! ```
//!
//! A single forward pass per image, no state machine. Each stage reads an
//! immutable input buffer and returns a freshly owned output, so the
//! pipeline is pure: validation happens once at entry and a failed
//! transform produces no partial output. Luma survives the meta round trip
//! bit-identical, so the output differs from a no-subsampling baseline
//! only through chroma averaging.

use tracing::debug;

use crate::buffer::{Dimensions, ImageBuffer};
use crate::color::{CscStrategy, FixedPoint, Float32, Float64, Strategy};
use crate::error::PipelineError;
use crate::pixel::{RgbPixel, YccSample};
use crate::subsample::{subsample, upsample};

/// Forward-convert every pixel of an RGB buffer
pub fn convert_to_ycc<S: CscStrategy>(
    rgb: &ImageBuffer<RgbPixel>,
) -> ImageBuffer<YccSample<S::Sample>> {
    let mut ycc = ImageBuffer::new(rgb.width(), rgb.height());
    for (out, &pixel) in ycc.as_mut_slice().iter_mut().zip(rgb.as_slice()) {
        *out = S::rgb_to_ycc(pixel);
    }
    ycc
}

/// Inverse-convert every sample of a YCbCr buffer
pub fn convert_to_rgb<S: CscStrategy>(
    ycc: &ImageBuffer<YccSample<S::Sample>>,
) -> ImageBuffer<RgbPixel> {
    let mut rgb = ImageBuffer::new(ycc.width(), ycc.height());
    for (out, &sample) in rgb.as_mut_slice().iter_mut().zip(ycc.as_slice()) {
        *out = S::ycc_to_rgb(sample);
    }
    rgb
}

/// Run the full pipeline over one image under strategy `S`
///
/// Pure function: no file or environment access. `pixels` must hold at
/// least `width * height` entries; any surplus is ignored.
///
/// # Errors
///
/// - [`PipelineError::InvalidDimensions`] if a dimension is zero or odd
/// - [`PipelineError::TruncatedInput`] if the buffer is too short
pub fn transform<S: CscStrategy>(
    pixels: &[RgbPixel],
    width: usize,
    height: usize,
) -> Result<Vec<RgbPixel>, PipelineError> {
    let dims = Dimensions::new(width, height)?;
    let expected = dims.pixel_count();
    if pixels.len() < expected {
        return Err(PipelineError::TruncatedInput {
            expected,
            actual: pixels.len(),
        });
    }

    let rgb = ImageBuffer::from_slice(width, height, &pixels[..expected]);

    let ycc = convert_to_ycc::<S>(&rgb);
    debug!(width, height, "converted to YCbCr");

    let meta = subsample::<S>(&ycc, dims);
    debug!(blocks = meta.len(), "subsampled to 4:2:0 meta grid");

    let restored = upsample::<S>(&meta, dims);
    let out = convert_to_rgb::<S>(&restored);
    debug!("reconstructed RGB");

    Ok(out.into_vec())
}

/// Run the full pipeline with a strategy chosen at runtime
pub fn transform_with(
    strategy: Strategy,
    pixels: &[RgbPixel],
    width: usize,
    height: usize,
) -> Result<Vec<RgbPixel>, PipelineError> {
    match strategy {
        Strategy::FixedPoint => transform::<FixedPoint>(pixels, width, height),
        Strategy::Float32 => transform::<Float32>(pixels, width, height),
        Strategy::Float64 => transform::<Float64>(pixels, width, height),
    }
}
