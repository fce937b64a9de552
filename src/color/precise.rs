//! Double-precision conversion strategy
//!
//! Same formulas as the single-precision path, evaluated in `f64` and
//! emitting studio range, so all three strategies are interchangeable
//! behind one trait.

use super::{clamp_f64, CscStrategy};
use crate::pixel::{RgbPixel, YccSample};

/// Double-precision strategy (`f64` samples)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float64;

impl CscStrategy for Float64 {
    type Sample = f64;

    #[inline]
    fn rgb_to_ycc(pixel: RgbPixel) -> YccSample<f64> {
        let r = pixel.r as f64 / 255.0;
        let g = pixel.g as f64 / 255.0;
        let b = pixel.b as f64 / 255.0;

        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        let cb = -0.168736 * r - 0.331264 * g + 0.5 * b;
        let cr = 0.5 * r - 0.418688 * g - 0.081312 * b;

        YccSample {
            y: clamp_f64(16.0 + y * 219.0),
            cb: clamp_f64(128.0 + cb * 224.0),
            cr: clamp_f64(128.0 + cr * 224.0),
        }
    }

    #[inline]
    fn ycc_to_rgb(sample: YccSample<f64>) -> RgbPixel {
        let y = 1.164 * (sample.y - 16.0);
        let cb = sample.cb - 128.0;
        let cr = sample.cr - 128.0;

        RgbPixel {
            r: clamp_f64(y + 1.596 * cr) as u8,
            g: clamp_f64(y - 0.813 * cr - 0.391 * cb) as u8,
            b: clamp_f64(y + 2.018 * cb) as u8,
        }
    }

    #[inline]
    fn average4(a: f64, b: f64, c: f64, d: f64) -> f64 {
        (a + b + c + d) / 4.0
    }
}
