//! Parallel image processing operations using Rayon.
//!
//! Same results as the sequential versions, bit for bit. Work is split by
//! rows: every task writes a disjoint run of output rows and only reads from
//! input that is never mutated while tasks run.
//!
//! # Example
//!
//! ```rust
//! use iris_core::PixelView;
//! use iris_ops::parallel;
//!
//! let src = vec![64u8; 256 * 256 * 4];
//! let view = PixelView::new(&src, 256, 256, 4).unwrap();
//! let blurred = parallel::box_blur(view, 5);
//! assert_eq!(blurred.as_slice(), src.as_slice());
//! ```

use crate::filter::{column_counts, effective_radius, horizontal_sums, vertical_band};
use crate::grayscale::convert_pixel;
use iris_core::{PixelBuffer, PixelView, PixelViewMut};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Bands per worker thread for the vertical pass.
const BANDS_PER_THREAD: usize = 4;

/// Rows per vertical band for an image of `height` rows.
fn band_rows(height: usize) -> usize {
    let bands = rayon::current_num_threads() * BANDS_PER_THREAD;
    height.div_ceil(bands).max(1)
}

/// Parallel box blur using separable running sums.
///
/// The horizontal pass runs one task per row. The vertical pass splits the
/// output into horizontal bands; each band seeds its own column
/// accumulators from the finished horizontal sums.
pub fn box_blur(src: PixelView<'_>, radius: usize) -> PixelBuffer {
    let shape = src.shape();
    trace!(
        width = shape.width(),
        height = shape.height(),
        channels = shape.channels(),
        radius,
        "parallel box_blur"
    );

    if radius == 0 {
        return src.to_buffer();
    }
    let radius = effective_radius(shape, radius);
    let (width, channels, row_len) = (shape.width(), shape.channels(), shape.row_len());

    let mut hsums = vec![0u64; shape.sample_count()];
    hsums
        .par_chunks_mut(row_len)
        .zip(src.as_slice().par_chunks(row_len))
        .for_each(|(out, row)| horizontal_sums(row, out, width, channels, radius));

    let counts = column_counts(shape, radius);
    let rows_per_band = band_rows(shape.height());
    debug!(rows_per_band, "vertical pass");

    let mut dst = PixelBuffer::zeroed(shape);
    dst.as_mut_slice()
        .par_chunks_mut(rows_per_band * row_len)
        .enumerate()
        .for_each(|(i, band)| {
            vertical_band(&hsums, band, shape, radius, i * rows_per_band, &counts);
        });

    dst
}

/// Parallel in-place grayscale conversion, one task per row.
pub fn convert_to_grayscale(view: &mut PixelViewMut<'_>) {
    let shape = view.shape();
    trace!(
        width = shape.width(),
        height = shape.height(),
        channels = shape.channels(),
        "parallel grayscale"
    );

    let channels = shape.channels();
    view.as_mut_slice()
        .par_chunks_mut(shape.row_len())
        .for_each(|row| row.chunks_exact_mut(channels).for_each(convert_pixel));
}
