//! # chromapipe
//!
//! RGB <-> YCbCr color-space conversion with 4:2:0 chroma subsampling.
//!
//! The core is a whole-buffer pixel pipeline: forward BT.601-derived
//! conversion, 2x2 chroma decimation into meta samples, chroma broadcast
//! reconstruction, and the paired inverse conversion. The numeric strategy
//! (integer fixed-point, single- or double-precision float) is pluggable
//! and chosen at configuration time.
//!
//! # Architecture
//!
//! ```text
//! chromapipe
//!   ├─> color      (Clamp, CscStrategy: FixedPoint / Float32 / Float64)
//!   ├─> subsample  (2x2 block -> MetaSample and back)
//!   ├─> pipeline   (validate -> convert -> subsample -> upsample -> invert)
//!   ├─> buffer     (ImageBuffer, Dimensions, BlockGrid)
//!   └─> bmp        (BMP header probe + raw RGB stream I/O, outside the core)
//! ```
//!
//! # Data Flow
//!
//! RGB buffer → full-resolution YCbCr → quarter-resolution meta grid →
//! reconstructed YCbCr → output RGB. Each stage allocates a fresh output
//! buffer and never mutates its input. Luma is carried through the meta
//! round trip bit-identical; chroma averaging is the only loss.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Image buffers, validated dimensions, and 2x2 block tiling
pub mod buffer;

/// Color space conversion strategies and saturation helpers
pub mod color;

/// Pipeline configuration (TOML + CLI overrides)
pub mod config;

/// Pipeline error taxonomy
pub mod error;

/// Pixel and sample value types
pub mod pixel;

/// Full transform composition
pub mod pipeline;

/// 4:2:0 subsampling and upsampling over meta-sample grids
pub mod subsample;

/// BMP header probing and raw RGB stream I/O (external collaborators)
pub mod bmp;

pub use buffer::{Block, BlockGrid, Dimensions, ImageBuffer};
pub use color::{CscStrategy, FixedPoint, Float32, Float64, Strategy};
pub use error::PipelineError;
pub use pixel::{MetaSample, RgbPixel, YccSample};
pub use pipeline::{transform, transform_with};
