//! Naive box blur, kept as a correctness and performance oracle.
//!
//! Visits the full `(2 * radius + 1)²` window of every output pixel and skips
//! positions outside `[0, height) x [0, width)`. Cost is
//! `O(height * width * channels * radius²)`; use [`crate::filter::box_blur`]
//! for real work.

use iris_core::{PixelBuffer, PixelView};
use tracing::trace;

/// Blurs `src` by brute force. Output equals [`crate::filter::box_blur`].
pub fn box_blur(src: PixelView<'_>, radius: usize) -> PixelBuffer {
    let shape = src.shape();
    let (width, height, channels) = (shape.width(), shape.height(), shape.channels());
    trace!(width, height, channels, radius, "reference box_blur");

    // Rows and columns past the image never contribute.
    let r = radius.min(width.max(height)) as isize;
    let (w, h) = (width as isize, height as isize);

    let mut dst = PixelBuffer::zeroed(shape);
    let out = dst.as_mut_slice();

    for row in 0..height {
        for col in 0..width {
            let mut sums = [0u64; 4];
            let mut count = 0u64;

            for dy in -r..=r {
                for dx in -r..=r {
                    let y = row as isize + dy;
                    let x = col as isize + dx;
                    if 0 <= y && y < h && 0 <= x && x < w {
                        let px = src.pixel(y as usize, x as usize);
                        for (s, &v) in sums.iter_mut().zip(px) {
                            *s += v as u64;
                        }
                        count += 1;
                    }
                }
            }

            let base = shape.pixel_offset(row, col);
            for c in 0..channels {
                out[base + c] = (sums[c] / count) as u8;
            }
        }
    }

    dst
}
