//! Pipeline error taxonomy
//!
//! Validation happens once, at pipeline entry. A failed transform never
//! produces partial output, and re-running it with the same inputs cannot
//! succeed where it previously failed.

/// Errors reported by the transform pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// Width or height is zero or odd. 4:2:0 subsampling tiles the image
    /// into 2x2 blocks, so an odd dimension would leave a partial block.
    #[error("invalid dimensions {width}x{height}: both must be positive and even")]
    InvalidDimensions {
        /// Requested image width in pixels
        width: usize,
        /// Requested image height in pixels
        height: usize,
    },

    /// Pixel buffer is shorter than `width * height`.
    #[error("truncated input: expected {expected} pixels, got {actual}")]
    TruncatedInput {
        /// Pixel count implied by the dimensions
        expected: usize,
        /// Pixel count actually supplied
        actual: usize,
    },
}
