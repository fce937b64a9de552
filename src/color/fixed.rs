//! Integer fixed-point conversion strategy
//!
//! Applies pre-scaled integer coefficients directly to 8-bit RGB and
//! divides by shifting. The forward path uses 16.16 coefficients; the
//! inverse uses larger constants matched to a 22-bit shift so the luma
//! gain (1.164) and chroma gains survive at full precision.

use super::{clamp_i32, CscStrategy};
use crate::pixel::{RgbPixel, YccSample};

// Forward coefficients, scaled by 65536.
// Y row sums to ~0.2557/0.5021/0.0975 of studio-range luma.
const Y_R: i32 = 16763;
const Y_G: i32 = 32909;
const Y_B: i32 = 6391;

const CB_R: i32 = -9676;
const CB_G: i32 = -18996;
const CB_B: i32 = 28672;

const CR_R: i32 = 28672;
const CR_G: i32 = -24009;
const CR_B: i32 = -4662;

// Inverse coefficients, scaled by 4194304 (22-bit shift).
const INV_Y: i32 = 4_882_170; // 1.164
const INV_CR_R: i32 = 6_694_109; // 1.596
const INV_CR_G: i32 = 3_409_969; // 0.813
const INV_CB_G: i32 = 1_639_973; // 0.391
const INV_CB_B: i32 = 8_464_105; // 2.018

/// Integer fixed-point strategy (8-bit samples)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint;

impl CscStrategy for FixedPoint {
    type Sample = u8;

    #[inline]
    fn rgb_to_ycc(pixel: RgbPixel) -> YccSample<u8> {
        let r = pixel.r as i32;
        let g = pixel.g as i32;
        let b = pixel.b as i32;

        // The arithmetic shift truncates toward negative infinity; this
        // is the contract, not an approximation of rounding. No clamp:
        // in-domain 8-bit input lands inside studio range by construction.
        let y = 16 + ((Y_R * r + Y_G * g + Y_B * b) >> 16);
        let cb = 128 + ((CB_R * r + CB_G * g + CB_B * b) >> 16);
        let cr = 128 + ((CR_R * r + CR_G * g + CR_B * b) >> 16);

        YccSample {
            y: y as u8,
            cb: cb as u8,
            cr: cr as u8,
        }
    }

    #[inline]
    fn ycc_to_rgb(sample: YccSample<u8>) -> RgbPixel {
        let y = INV_Y * (sample.y as i32 - 16);
        let cb = sample.cb as i32 - 128;
        let cr = sample.cr as i32 - 128;

        let r = (y + INV_CR_R * cr) >> 22;
        let g = (y - INV_CR_G * cr - INV_CB_G * cb) >> 22;
        let b = (y + INV_CB_B * cb) >> 22;

        RgbPixel {
            r: clamp_i32(r) as u8,
            g: clamp_i32(g) as u8,
            b: clamp_i32(b) as u8,
        }
    }

    #[inline]
    fn average4(a: u8, b: u8, c: u8, d: u8) -> u8 {
        // Floor division by 4; the discarded remainder is a deterministic
        // downward bias.
        ((a as u32 + b as u32 + c as u32 + d as u32) >> 2) as u8
    }
}
