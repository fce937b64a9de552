//! End-to-end pipeline tests
//!
//! Exercises the full transform through the public API, plus property
//! tests for the saturation and round-trip contracts.

use proptest::prelude::*;

use chromapipe::buffer::{Dimensions, ImageBuffer};
use chromapipe::color::{clamp_f64, clamp_i32};
use chromapipe::pipeline::{convert_to_ycc, transform};
use chromapipe::subsample::{subsample, upsample};
use chromapipe::{
    transform_with, CscStrategy, FixedPoint, Float32, Float64, PipelineError, RgbPixel, Strategy,
};

fn channel_diff(a: RgbPixel, b: RgbPixel) -> i32 {
    [(a.r, b.r), (a.g, b.g), (a.b, b.b)]
        .iter()
        .map(|&(x, y)| (x as i32 - y as i32).abs())
        .max()
        .unwrap()
}

#[test]
fn flat_gray_image_survives_the_pipeline() {
    // Flat regions have zero chroma averaging error, so the output must
    // sit within the per-strategy round-trip epsilon of the input.
    let gray = RgbPixel::new(128, 128, 128);
    let pixels = vec![gray; 16];

    for strategy in [Strategy::FixedPoint, Strategy::Float32, Strategy::Float64] {
        let out = transform_with(strategy, &pixels, 4, 4).unwrap();
        assert_eq!(out.len(), 16);
        for p in &out {
            assert!(
                channel_diff(*p, gray) <= 2,
                "{strategy}: gray drifted to {:?}",
                p
            );
        }
    }
}

#[test]
fn two_color_block_broadcasts_floor_averaged_chroma() {
    // 2x2 block of saturated colors: after subsample + upsample, all 4
    // positions share the floor-average chroma of the individually
    // converted pixels, while each position keeps its own luma.
    let pixels = [
        RgbPixel::new(255, 0, 0),
        RgbPixel::new(0, 255, 0),
        RgbPixel::new(0, 0, 255),
        RgbPixel::new(255, 255, 0),
    ];

    let converted: Vec<_> = pixels.iter().map(|&p| FixedPoint::rgb_to_ycc(p)).collect();
    let expected_cb = converted.iter().map(|s| s.cb as u32).sum::<u32>() >> 2;
    let expected_cr = converted.iter().map(|s| s.cr as u32).sum::<u32>() >> 2;

    let dims = Dimensions::new(2, 2).unwrap();
    let rgb = ImageBuffer::from_slice(2, 2, &pixels);
    let ycc = convert_to_ycc::<FixedPoint>(&rgb);
    let meta = subsample::<FixedPoint>(&ycc, dims);
    let restored = upsample::<FixedPoint>(&meta, dims);

    for i in 0..4 {
        assert_eq!(restored[i].cb as u32, expected_cb, "cb at position {}", i);
        assert_eq!(restored[i].cr as u32, expected_cr, "cr at position {}", i);
        assert_eq!(restored[i].y, converted[i].y, "luma at position {}", i);
    }
}

#[test]
fn odd_dimensions_are_rejected_without_output() {
    let pixels = vec![RgbPixel::default(); 100];
    for (w, h) in [(5, 4), (4, 5), (99, 2), (0, 10)] {
        let err = transform::<Float32>(&pixels, w, h).unwrap_err();
        assert_eq!(err, PipelineError::InvalidDimensions {
            width: w,
            height: h
        });
    }
}

#[test]
fn short_buffer_is_rejected_before_conversion() {
    let pixels = vec![RgbPixel::default(); 7];
    assert_eq!(
        transform::<Float64>(&pixels, 4, 2),
        Err(PipelineError::TruncatedInput {
            expected: 8,
            actual: 7
        })
    );
}

#[test]
fn luma_is_bit_identical_through_the_meta_round_trip() {
    let dims = Dimensions::new(8, 8).unwrap();
    let pixels: Vec<RgbPixel> = (0..64)
        .map(|i| RgbPixel::new((i * 37 % 256) as u8, (i * 11 % 256) as u8, (i * 73 % 256) as u8))
        .collect();
    let rgb = ImageBuffer::from_slice(8, 8, &pixels);

    let baseline = convert_to_ycc::<FixedPoint>(&rgb);
    let restored = upsample::<FixedPoint>(&subsample::<FixedPoint>(&baseline, dims), dims);
    for i in 0..64 {
        assert_eq!(restored[i].y, baseline[i].y, "luma changed at index {}", i);
    }
}

proptest! {
    #[test]
    fn clamp_is_total_and_idempotent(x in -1.0e12f64..1.0e12f64) {
        let once = clamp_f64(x);
        prop_assert!((0.0..=255.0).contains(&once));
        prop_assert_eq!(clamp_f64(once), once);
    }

    #[test]
    fn clamp_i32_is_total_and_idempotent(x in i32::MIN..i32::MAX) {
        let once = clamp_i32(x);
        prop_assert!((0..=255).contains(&once));
        prop_assert_eq!(clamp_i32(once), once);
    }

    #[test]
    fn fixed_point_round_trip_is_bounded(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        // Truncation happens in both directions and the downward biases
        // stack (worst on the blue channel), so the bound is wider than
        // the floating strategies'.
        let p = RgbPixel::new(r, g, b);
        let q = FixedPoint::ycc_to_rgb(FixedPoint::rgb_to_ycc(p));
        prop_assert!(channel_diff(p, q) <= 5, "{:?} -> {:?}", p, q);
    }

    #[test]
    fn float32_round_trip_is_bounded(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let p = RgbPixel::new(r, g, b);
        let q = Float32::ycc_to_rgb(Float32::rgb_to_ycc(p));
        prop_assert!(channel_diff(p, q) <= 2, "{:?} -> {:?}", p, q);
    }

    #[test]
    fn float64_round_trip_is_bounded(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let p = RgbPixel::new(r, g, b);
        let q = Float64::ycc_to_rgb(Float64::rgb_to_ycc(p));
        prop_assert!(channel_diff(p, q) <= 2, "{:?} -> {:?}", p, q);
    }

    #[test]
    fn integer_chroma_average_is_the_floor(
        c1 in 0u8..=255, c2 in 0u8..=255, c3 in 0u8..=255, c4 in 0u8..=255
    ) {
        let expected = (c1 as u32 + c2 as u32 + c3 as u32 + c4 as u32) / 4;
        prop_assert_eq!(FixedPoint::average4(c1, c2, c3, c4) as u32, expected);
    }

    #[test]
    fn pipeline_never_panics_on_valid_input(
        seed in 0u32..10_000,
        half_w in 1usize..8,
        half_h in 1usize..8,
    ) {
        let (w, h) = (half_w * 2, half_h * 2);
        let pixels: Vec<RgbPixel> = (0..w * h)
            .map(|i| {
                let v = (i as u32).wrapping_mul(seed.wrapping_add(1));
                RgbPixel::new(v as u8, (v >> 8) as u8, (v >> 16) as u8)
            })
            .collect();

        let out = transform::<FixedPoint>(&pixels, w, h).unwrap();
        prop_assert_eq!(out.len(), w * h);
    }
}
