//! Box blur with a clipped window.
//!
//! Every output sample is the truncated integer mean of the source samples in
//! the `(2 * radius + 1)²` window around it. The window is clipped at the
//! image border: edge pixels average fewer samples, nothing is padded or
//! wrapped.
//!
//! # Algorithm
//!
//! Separable running sums, independent of the radius:
//!
//! 1. Horizontal pass: for each row, slide a window along the row and store
//!    the exact (undivided) window sum per sample as `u64`.
//! 2. Vertical pass: slide a window down the columns of the horizontal sums,
//!    keeping per-column `u64` accumulators.
//! 3. Divide once by `rows_in_window * cols_in_window`.
//!
//! Because nothing is divided before step 3, the result is bit-identical to
//! the four-loop version in [`crate::reference`].
//!
//! # Example
//!
//! ```rust
//! use iris_core::PixelView;
//! use iris_ops::filter::box_blur;
//!
//! let src = vec![128u8; 16 * 16 * 4];
//! let view = PixelView::new(&src, 16, 16, 4).unwrap();
//! let blurred = box_blur(view, 3);
//! assert_eq!(blurred.as_slice(), src.as_slice());
//! ```

use iris_core::{PixelBuffer, PixelView, Shape};
use tracing::trace;

/// Number of positions of `[pos - radius, pos + radius]` inside `[0, len)`.
#[inline]
pub(crate) fn window_len(pos: usize, radius: usize, len: usize) -> usize {
    (pos + radius).min(len - 1) - pos.saturating_sub(radius) + 1
}

/// Largest radius that still changes the result.
///
/// A window reaching past both edges covers the whole axis, so clamping here
/// keeps the running-sum indices from overflowing without changing output.
#[inline]
pub(crate) fn effective_radius(shape: Shape, radius: usize) -> usize {
    radius.min(shape.width().max(shape.height()))
}

/// Horizontal window size for every sample of a row.
pub(crate) fn column_counts(shape: Shape, radius: usize) -> Vec<u64> {
    let width = shape.width();
    let channels = shape.channels();
    (0..shape.row_len())
        .map(|i| window_len(i / channels, radius, width) as u64)
        .collect()
}

/// Writes the clipped horizontal window sum of every sample of `row` to `out`.
pub(crate) fn horizontal_sums(
    row: &[u8],
    out: &mut [u64],
    width: usize,
    channels: usize,
    radius: usize,
) {
    debug_assert_eq!(row.len(), width * channels);
    debug_assert_eq!(out.len(), row.len());

    for c in 0..channels {
        let mut sum = 0u64;
        for x in 0..=radius.min(width - 1) {
            sum += row[x * channels + c] as u64;
        }

        for x in 0..width {
            out[x * channels + c] = sum;

            // Slide to x + 1: the right edge enters, the left edge leaves.
            let enter = x + radius + 1;
            if enter < width {
                sum += row[enter * channels + c] as u64;
            }
            if x >= radius {
                sum -= row[(x - radius) * channels + c] as u64;
            }
        }
    }
}

#[inline]
fn sum_row(hsums: &[u64], row_len: usize, y: usize) -> &[u64] {
    &hsums[y * row_len..(y + 1) * row_len]
}

#[inline]
fn accumulate(acc: &mut [u64], row: &[u64]) {
    for (a, &s) in acc.iter_mut().zip(row) {
        *a += s;
    }
}

#[inline]
fn retire(acc: &mut [u64], row: &[u64]) {
    for (a, &s) in acc.iter_mut().zip(row) {
        *a -= s;
    }
}

/// Vertical pass for output rows `first_row..first_row + band.len() / row_len`.
///
/// Reads only `hsums`, writes only `band`, and seeds its own accumulators, so
/// disjoint bands can run concurrently.
pub(crate) fn vertical_band(
    hsums: &[u64],
    band: &mut [u8],
    shape: Shape,
    radius: usize,
    first_row: usize,
    counts: &[u64],
) {
    let height = shape.height();
    let row_len = shape.row_len();

    let mut acc = vec![0u64; row_len];
    let top = first_row.saturating_sub(radius);
    let bottom = (first_row + radius).min(height - 1);
    for y in top..=bottom {
        accumulate(&mut acc, sum_row(hsums, row_len, y));
    }

    for (i, out_row) in band.chunks_exact_mut(row_len).enumerate() {
        let y = first_row + i;
        let rows = window_len(y, radius, height) as u64;

        for ((o, &sum), &cols) in out_row.iter_mut().zip(&acc).zip(counts) {
            *o = (sum / (rows * cols)) as u8;
        }

        let enter = y + radius + 1;
        if enter < height {
            accumulate(&mut acc, sum_row(hsums, row_len, enter));
        }
        if y >= radius {
            retire(&mut acc, sum_row(hsums, row_len, y - radius));
        }
    }
}

/// Blurs `src` with a clipped box window of the given radius.
///
/// Always returns a newly allocated buffer of the same shape; `radius == 0`
/// returns an exact copy.
pub fn box_blur(src: PixelView<'_>, radius: usize) -> PixelBuffer {
    let shape = src.shape();
    trace!(
        width = shape.width(),
        height = shape.height(),
        channels = shape.channels(),
        radius,
        "box_blur"
    );

    if radius == 0 {
        return src.to_buffer();
    }
    let radius = effective_radius(shape, radius);
    let row_len = shape.row_len();

    let mut hsums = vec![0u64; shape.sample_count()];
    for (row, out) in src.rows().zip(hsums.chunks_exact_mut(row_len)) {
        horizontal_sums(row, out, shape.width(), shape.channels(), radius);
    }

    let counts = column_counts(shape, radius);
    let mut dst = PixelBuffer::zeroed(shape);
    vertical_band(&hsums, dst.as_mut_slice(), shape, radius, 0, &counts);
    dst
}
