//! Pixel and sample value types
//!
//! All conversions operate on these plain value types. Single-sample
//! conversions return by value; there is no per-sample heap traffic.

/// 8-bit RGB pixel, each channel in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbPixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbPixel {
    /// Create a pixel from its three channels
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// YCbCr sample in the active strategy's scalar type
///
/// `S` is `u8` for the fixed-point strategy and `f32`/`f64` for the
/// floating strategies. Values occupy studio range: Y in [16, 235],
/// Cb/Cr in [16, 240].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YccSample<S> {
    /// Luma
    pub y: S,
    /// Blue-difference chroma
    pub cb: S,
    /// Red-difference chroma
    pub cr: S,
}

/// One 4:2:0 unit: a 2x2 block reduced to 4 luma values plus one shared
/// chroma pair
///
/// Luma is stored in source raster order: top-left, top-right,
/// bottom-left, bottom-right. Chroma is the average over the block, so
/// reconstructing the block broadcasts the same Cb/Cr to all 4 positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetaSample<S> {
    /// Luma of the 4 source positions, carried verbatim
    pub y: [S; 4],
    /// Averaged blue-difference chroma for the block
    pub cb: S,
    /// Averaged red-difference chroma for the block
    pub cr: S,
}
