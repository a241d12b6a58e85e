//! Golden value tests.
//!
//! Small inputs with outputs worked out independently of this workspace, by
//! running the four-loop clipped average and the truncated RGB mean by hand.
//! They pin the exact integer results, including truncation and border
//! counts, for every blur implementation.

use iris_core::PixelBuffer;
use iris_ops::{filter, parallel, reference};

// ---------------------------------------------------------------------------
// Test input generators
// ---------------------------------------------------------------------------

/// 3x3 RGBA with every channel distinct per pixel.
///
/// Pixel `i` (row-major) is `[10 * (i + 1), 3 * i + 1, 255 - 20 * i, i * i]`.
fn distinct_3x3_rgba() -> PixelBuffer {
    let mut data = Vec::with_capacity(9 * 4);
    for i in 0..9u8 {
        data.extend_from_slice(&[10 * (i + 1), 3 * i + 1, 255 - 20 * i, i * i]);
    }
    PixelBuffer::from_vec(data, 3, 3, 4).unwrap()
}

/// 4x2 RGB ramp, sample `i` is `i * 29 mod 256`.
fn ramp_4x2_rgb() -> PixelBuffer {
    let data = (0..4 * 2 * 3).map(|i: usize| (i * 29 % 256) as u8).collect();
    PixelBuffer::from_vec(data, 4, 2, 3).unwrap()
}

/// Every blur implementation, so each golden is checked against all of them.
fn blurs() -> [(&'static str, fn(iris_core::PixelView<'_>, usize) -> PixelBuffer); 3] {
    [
        ("sliding", filter::box_blur),
        ("parallel", parallel::box_blur),
        ("reference", reference::box_blur),
    ]
}

// ---------------------------------------------------------------------------
// Box blur
// ---------------------------------------------------------------------------

#[test]
fn test_golden_3x3_radius_1() {
    let src = distinct_3x3_rgba();
    let expected: [[u8; 4]; 9] = [
        [30, 7, 215, 6],
        [35, 8, 205, 9],
        [40, 10, 195, 11],
        [45, 11, 185, 18],
        [50, 13, 175, 22],
        [55, 14, 165, 26],
        [60, 16, 155, 27],
        [65, 17, 145, 33],
        [70, 19, 135, 38],
    ];

    for (name, blur) in blurs() {
        let out = blur(src.view(), 1);
        for (i, px) in expected.iter().enumerate() {
            assert_eq!(out.pixel(i / 3, i % 3), px, "{name}: pixel {i}");
        }
    }
}

#[test]
fn test_golden_3x3_center_and_corners() {
    let src = distinct_3x3_rgba();
    let out = filter::box_blur(src.view(), 1);

    // Center averages all nine pixels.
    for ch in 0..4 {
        let sum: u32 = (0..9).map(|i| src.sample(i / 3, i % 3, ch) as u32).sum();
        assert_eq!(out.sample(1, 1, ch) as u32, sum / 9);
    }

    // Corners average their clipped 2x2 window.
    let corners = [
        ((0, 0), [(0, 0), (0, 1), (1, 0), (1, 1)]),
        ((0, 2), [(0, 1), (0, 2), (1, 1), (1, 2)]),
        ((2, 0), [(1, 0), (1, 1), (2, 0), (2, 1)]),
        ((2, 2), [(1, 1), (1, 2), (2, 1), (2, 2)]),
    ];
    for ((r, c), window) in corners {
        for ch in 0..4 {
            let sum: u32 = window
                .iter()
                .map(|&(y, x)| src.sample(y, x, ch) as u32)
                .sum();
            assert_eq!(out.sample(r, c, ch) as u32, sum / 4, "corner ({r}, {c})");
        }
    }
}

#[test]
fn test_golden_ramp_4x2() {
    let src = ramp_4x2_rgb();
    let radius_1: [u8; 24] = [
        89, 118, 147, 90, 119, 148, 92, 121, 150, 71, 100, 129, //
        89, 118, 147, 90, 119, 148, 92, 121, 150, 71, 100, 129,
    ];
    let radius_2: [u8; 24] = [
        90, 119, 148, 80, 109, 138, 80, 109, 138, 92, 121, 150, //
        90, 119, 148, 80, 109, 138, 80, 109, 138, 92, 121, 150,
    ];

    for (name, blur) in blurs() {
        assert_eq!(blur(src.view(), 1).as_slice(), &radius_1, "{name} radius 1");
        assert_eq!(blur(src.view(), 2).as_slice(), &radius_2, "{name} radius 2");
    }
}

// ---------------------------------------------------------------------------
// Grayscale
// ---------------------------------------------------------------------------

#[test]
fn test_golden_grayscale_3x3() {
    let mut buf = distinct_3x3_rgba();
    iris_ops::grayscale::convert(&mut buf.view_mut());

    let expected: [u8; 36] = [
        88, 88, 88, 0, 86, 86, 86, 1, 84, 84, 84, 4, //
        81, 81, 81, 9, 79, 79, 79, 16, 77, 77, 77, 25, //
        74, 74, 74, 36, 72, 72, 72, 49, 70, 70, 70, 64,
    ];
    assert_eq!(buf.as_slice(), &expected);
}
