//! 4:2:0 chroma subsampling and upsampling
//!
//! [`subsample`] reduces every 2x2 YCbCr block to one [`MetaSample`]: the
//! 4 luma values verbatim, in raster order, plus one averaged chroma pair.
//! [`upsample`] reconstructs the block, copying luma back to the exact
//! position it was captured from and broadcasting the shared chroma to all
//! 4 positions. The luma round trip is lossless; the chroma broadcast is
//! the intended 4:2:0 artifact (blockiness on sharp chroma edges).

use crate::buffer::{BlockGrid, Dimensions, ImageBuffer};
use crate::color::CscStrategy;
use crate::pixel::{MetaSample, YccSample};

/// Reduce a full-resolution YCbCr buffer to a half-resolution meta grid
///
/// The output has exactly one quarter the element count of the input:
/// `(width/2) x (height/2)` meta samples.
pub fn subsample<S: CscStrategy>(
    ycc: &ImageBuffer<YccSample<S::Sample>>,
    dims: Dimensions,
) -> ImageBuffer<MetaSample<S::Sample>> {
    debug_assert_eq!(ycc.len(), dims.pixel_count());

    let (half_w, half_h) = dims.half();
    let mut meta = ImageBuffer::new(half_w, half_h);

    for block in BlockGrid::new(dims).blocks() {
        let [tl, tr, bl, br] = block.source.map(|i| ycc[i]);
        meta[block.meta_index] = MetaSample {
            y: [tl.y, tr.y, bl.y, br.y],
            cb: S::average4(tl.cb, tr.cb, bl.cb, br.cb),
            cr: S::average4(tl.cr, tr.cr, bl.cr, br.cr),
        };
    }

    meta
}

/// Reconstruct a full-resolution YCbCr buffer from a meta grid
pub fn upsample<S: CscStrategy>(
    meta: &ImageBuffer<MetaSample<S::Sample>>,
    dims: Dimensions,
) -> ImageBuffer<YccSample<S::Sample>> {
    let (half_w, half_h) = dims.half();
    debug_assert_eq!(meta.len(), half_w * half_h);

    let mut ycc = ImageBuffer::new(dims.width(), dims.height());

    for block in BlockGrid::new(dims).blocks() {
        let m = meta[block.meta_index];
        for (position, &index) in block.source.iter().enumerate() {
            ycc[index] = YccSample {
                y: m.y[position],
                cb: m.cb,
                cr: m.cr,
            };
        }
    }

    ycc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{FixedPoint, Float32};

    fn ycc_u8(y: u8, cb: u8, cr: u8) -> YccSample<u8> {
        YccSample { y, cb, cr }
    }

    #[test]
    fn test_subsample_averages_chroma_floor() {
        let dims = Dimensions::new(2, 2).unwrap();
        let ycc = ImageBuffer::from_slice(
            2,
            2,
            &[
                ycc_u8(10, 1, 100),
                ycc_u8(20, 1, 101),
                ycc_u8(30, 1, 102),
                ycc_u8(40, 2, 103),
            ],
        );

        let meta = subsample::<FixedPoint>(&ycc, dims);
        assert_eq!(meta.len(), 1);
        assert_eq!(meta[0].y, [10, 20, 30, 40]);
        assert_eq!(meta[0].cb, 1); // (1+1+1+2) >> 2 = 1
        assert_eq!(meta[0].cr, 101); // (100+101+102+103) >> 2 = 101
    }

    #[test]
    fn test_upsample_restores_luma_order_and_broadcasts_chroma() {
        let dims = Dimensions::new(2, 2).unwrap();
        let mut meta = ImageBuffer::new(1, 1);
        meta[0] = MetaSample {
            y: [10u8, 20, 30, 40],
            cb: 90,
            cr: 200,
        };

        let ycc = upsample::<FixedPoint>(&meta, dims);
        assert_eq!(ycc.len(), 4);
        // Y1 -> top-left, Y2 -> top-right, Y3 -> bottom-left, Y4 -> bottom-right
        assert_eq!(ycc[0].y, 10);
        assert_eq!(ycc[1].y, 20);
        assert_eq!(ycc[2].y, 30);
        assert_eq!(ycc[3].y, 40);
        for i in 0..4 {
            assert_eq!(ycc[i].cb, 90);
            assert_eq!(ycc[i].cr, 200);
        }
    }

    #[test]
    fn test_luma_lossless_round_trip() {
        let dims = Dimensions::new(4, 4).unwrap();
        let samples: Vec<YccSample<u8>> = (0..16)
            .map(|i| ycc_u8(16 + i as u8 * 13, 100 + i as u8, 200 - i as u8))
            .collect();
        let ycc = ImageBuffer::from_slice(4, 4, &samples);

        let restored = upsample::<FixedPoint>(&subsample::<FixedPoint>(&ycc, dims), dims);
        for i in 0..16 {
            assert_eq!(restored[i].y, ycc[i].y, "luma changed at index {}", i);
        }
    }

    #[test]
    fn test_meta_grid_is_quarter_size() {
        let dims = Dimensions::new(6, 4).unwrap();
        let ycc: ImageBuffer<YccSample<f32>> = ImageBuffer::new(6, 4);
        let meta = subsample::<Float32>(&ycc, dims);
        assert_eq!(meta.width(), 3);
        assert_eq!(meta.height(), 2);
        assert_eq!(meta.len() * 4, ycc.len());
    }

    #[test]
    fn test_float_average_is_exact() {
        let dims = Dimensions::new(2, 2).unwrap();
        let ycc = ImageBuffer::from_slice(
            2,
            2,
            &[
                YccSample {
                    y: 100.0f32,
                    cb: 1.0,
                    cr: 0.0,
                },
                YccSample {
                    y: 100.0,
                    cb: 2.0,
                    cr: 0.0,
                },
                YccSample {
                    y: 100.0,
                    cb: 3.0,
                    cr: 0.0,
                },
                YccSample {
                    y: 100.0,
                    cb: 4.0,
                    cr: 0.0,
                },
            ],
        );
        let meta = subsample::<Float32>(&ycc, dims);
        assert_eq!(meta[0].cb, 2.5);
    }
}
