//! Color space conversion strategies
//!
//! Forward (RGB -> YCbCr) and inverse (YCbCr -> RGB) BT.601-derived
//! transforms, implemented under three interchangeable numeric strategies:
//!
//! - [`FixedPoint`]: 8-bit samples, pre-scaled integer coefficients with
//!   bit-shift scaling. Fastest, truncating, bit-exact contract.
//! - [`Float32`]: `f32` samples, normalized [0,1] matrix with studio-range
//!   rescale. The reference arithmetic.
//! - [`Float64`]: the same formulas evaluated in double precision.
//!
//! All strategies emit studio range (Y: 16-235, Cb/Cr: 16-240).
//!
//! # Coefficient conventions
//!
//! The fixed-point path applies 16-bit-fraction weights directly to 8-bit
//! RGB and shifts right by 16; the arithmetic shift truncates toward
//! negative infinity, and that truncation (not rounding) is part of the
//! contract. The floating paths scale RGB to [0,1], apply the canonical
//! BT.601 matrix, then rescale (Y*219+16, Cb/Cr*224+128).

mod fixed;
mod float;
mod precise;

pub use fixed::FixedPoint;
pub use float::Float32;
pub use precise::Float64;

use crate::pixel::{RgbPixel, YccSample};
use serde::{Deserialize, Serialize};

/// Saturate an integer into the displayable channel range [0, 255]
///
/// Pure, total, idempotent.
#[inline]
pub fn clamp_i32(x: i32) -> i32 {
    x.clamp(0, 255)
}

/// Saturate a single-precision value into [0, 255]
#[inline]
pub fn clamp_f32(x: f32) -> f32 {
    x.clamp(0.0, 255.0)
}

/// Saturate a double-precision value into [0, 255]
#[inline]
pub fn clamp_f64(x: f64) -> f64 {
    x.clamp(0.0, 255.0)
}

/// A numeric strategy for the forward/inverse color matrix and its
/// rounding rule
///
/// Implementations are stateless marker types; every operation is a pure
/// function on sample values. The forward and inverse transforms are
/// numerically paired: a strategy's `ycc_to_rgb` uses coefficients matched
/// to its `rgb_to_ycc`.
pub trait CscStrategy {
    /// Scalar type carried through the YCbCr stages
    type Sample: Copy + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    /// Forward transform for one pixel; no neighbor dependence, no error
    /// conditions (all 8-bit inputs are in-domain)
    fn rgb_to_ycc(pixel: RgbPixel) -> YccSample<Self::Sample>;

    /// Inverse transform for one sample; each channel is saturated into
    /// [0, 255]. Out-of-range intermediates are expected, not a fault.
    fn ycc_to_rgb(sample: YccSample<Self::Sample>) -> RgbPixel;

    /// Average of 4 chroma samples from one 2x2 block
    ///
    /// The fixed-point strategy floors (`>> 2`); the floating strategies
    /// divide exactly.
    fn average4(a: Self::Sample, b: Self::Sample, c: Self::Sample, d: Self::Sample)
        -> Self::Sample;
}

/// Runtime strategy selector, chosen at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Integer fixed-point with bit-shift scaling
    FixedPoint,
    /// Single-precision normalized matrix
    Float32,
    /// Double-precision matrix
    Float64,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::FixedPoint
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedPoint => write!(f, "fixed-point"),
            Self::Float32 => write!(f, "float32"),
            Self::Float64 => write!(f, "float64"),
        }
    }
}
