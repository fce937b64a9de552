//! Single-precision normalized conversion strategy
//!
//! RGB is scaled to [0,1], multiplied by the canonical BT.601 matrix, then
//! rescaled to studio range (Y*219+16, Cb/Cr*224+128) and saturated.

use super::{clamp_f32, CscStrategy};
use crate::pixel::{RgbPixel, YccSample};

/// Single-precision strategy (`f32` samples)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float32;

impl CscStrategy for Float32 {
    type Sample = f32;

    #[inline]
    fn rgb_to_ycc(pixel: RgbPixel) -> YccSample<f32> {
        let r = pixel.r as f32 / 255.0;
        let g = pixel.g as f32 / 255.0;
        let b = pixel.b as f32 / 255.0;

        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        let cb = -0.168736 * r - 0.331264 * g + 0.5 * b;
        let cr = 0.5 * r - 0.418688 * g - 0.081312 * b;

        YccSample {
            y: clamp_f32(16.0 + y * 219.0),
            cb: clamp_f32(128.0 + cb * 224.0),
            cr: clamp_f32(128.0 + cr * 224.0),
        }
    }

    #[inline]
    fn ycc_to_rgb(sample: YccSample<f32>) -> RgbPixel {
        let y = 1.164 * (sample.y - 16.0);
        let cb = sample.cb - 128.0;
        let cr = sample.cr - 128.0;

        // The cast truncates; saturation happens before it.
        RgbPixel {
            r: clamp_f32(y + 1.596 * cr) as u8,
            g: clamp_f32(y - 0.813 * cr - 0.391 * cb) as u8,
            b: clamp_f32(y + 2.018 * cb) as u8,
        }
    }

    #[inline]
    fn average4(a: f32, b: f32, c: f32, d: f32) -> f32 {
        (a + b + c + d) / 4.0
    }
}
