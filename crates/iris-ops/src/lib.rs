//! # iris-ops
//!
//! Pixel kernels over dense `u8` buffers.
//!
//! This crate implements the operations exposed at the iris library
//! boundary:
//!
//! - [`add`] - integer addition
//! - [`convert_to_grayscale`] - in-place unweighted luminance
//! - [`apply_box_blur`] - clipped box blur into a new buffer
//!
//! # Modules
//!
//! - [`grayscale`] - luminance conversion
//! - [`filter`] - sliding-window box blur
//! - [`reference`] - naive four-loop box blur used as an oracle
//! - [`parallel`] - row-parallel variants (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use iris_ops::{apply_box_blur, convert_to_grayscale};
//!
//! let mut pixels = vec![90u8, 60, 30, 255].repeat(8 * 8);
//! convert_to_grayscale(&mut pixels, 8, 8, 4).unwrap();
//! assert_eq!(&pixels[..4], &[60, 60, 60, 255]);
//!
//! let blurred = apply_box_blur(&pixels, 8, 8, 4, 2).unwrap();
//! assert_eq!(blurred.as_slice(), pixels.as_slice());
//! ```
//!
//! # Errors
//!
//! Both image operations validate before touching memory. A buffer whose
//! length disagrees with `width * height * channels`, or whose channel count
//! is not 3 or 4, yields [`OpsError::InvalidShape`]; a negative blur radius
//! yields [`OpsError::InvalidRadius`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod filter;
pub mod grayscale;
pub mod reference;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use iris_core::{PixelBuffer, PixelView, PixelViewMut, Shape};

use tracing::debug;

/// Adds two integers, wrapping on overflow.
#[inline]
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Converts `data` to grayscale in place.
///
/// `data` holds `height` rows of `width` pixels with `channels` (3 or 4)
/// interleaved samples each. Alpha is preserved.
///
/// # Errors
///
/// [`OpsError::InvalidShape`] if the geometry is invalid; `data` is then
/// left untouched.
pub fn convert_to_grayscale(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
) -> OpsResult<()> {
    let mut view = PixelViewMut::new(data, width, height, channels)?;
    grayscale_view(&mut view);
    Ok(())
}

/// Converts a validated view to grayscale in place.
pub fn grayscale_view(view: &mut PixelViewMut<'_>) {
    debug!(parallel = cfg!(feature = "parallel"), "grayscale");

    #[cfg(feature = "parallel")]
    parallel::convert_to_grayscale(view);
    #[cfg(not(feature = "parallel"))]
    grayscale::convert(view);
}

/// Blurs `data` into a newly allocated buffer of the same shape.
///
/// Each output sample is the truncated mean of the `(2 * radius + 1)²`
/// window around it, clipped at the image border. `radius == 0` copies.
///
/// # Errors
///
/// - [`OpsError::InvalidShape`] if the geometry is invalid
/// - [`OpsError::InvalidRadius`] if `radius < 0`
pub fn apply_box_blur(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    radius: i64,
) -> OpsResult<PixelBuffer> {
    let view = PixelView::new(data, width, height, channels)?;
    blur_view(view, radius)
}

/// Blurs a validated view into a newly allocated buffer.
///
/// # Errors
///
/// [`OpsError::InvalidRadius`] if `radius < 0`.
pub fn blur_view(view: PixelView<'_>, radius: i64) -> OpsResult<PixelBuffer> {
    let radius = check_radius(radius)?;
    debug!(radius, parallel = cfg!(feature = "parallel"), "box blur");

    #[cfg(feature = "parallel")]
    let blurred = parallel::box_blur(view, radius);
    #[cfg(not(feature = "parallel"))]
    let blurred = filter::box_blur(view, radius);

    Ok(blurred)
}

/// Converts a signed radius to `usize`.
///
/// Radii too large for `usize` saturate; any radius past the image edge
/// already covers the whole image.
///
/// # Errors
///
/// [`OpsError::InvalidRadius`] if `radius < 0`.
pub fn check_radius(radius: i64) -> OpsResult<usize> {
    if radius < 0 {
        return Err(OpsError::InvalidRadius(radius));
    }
    Ok(usize::try_from(radius).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(10, 25), 35);
        assert_eq!(add(-4, 4), 0);
        assert_eq!(add(i64::MAX, 1), i64::MIN);
    }

    #[test]
    fn test_check_radius() {
        assert_eq!(check_radius(0).unwrap(), 0);
        assert_eq!(check_radius(7).unwrap(), 7);
        assert_eq!(check_radius(-1).unwrap_err(), OpsError::InvalidRadius(-1));
    }

    #[test]
    fn test_blur_negative_radius() {
        let data = vec![0u8; 4 * 4 * 3];
        let err = apply_box_blur(&data, 4, 4, 3, -1).unwrap_err();
        assert!(matches!(err, OpsError::InvalidRadius(-1)));
    }

    #[test]
    fn test_blur_length_mismatch() {
        let data = vec![0u8; 4 * 4 * 3 - 1];
        let err = apply_box_blur(&data, 4, 4, 3, 1).unwrap_err();
        assert!(matches!(err, OpsError::InvalidShape(_)));
    }

    #[test]
    fn test_grayscale_bad_channels_untouched() {
        let mut data = vec![1u8, 2, 3, 4, 5, 6];
        let err = convert_to_grayscale(&mut data, 3, 1, 2).unwrap_err();
        assert!(matches!(err, OpsError::InvalidShape(_)));
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_blur_returns_independent_buffer() {
        let mut data: Vec<u8> = (0..5 * 5 * 4).map(|i| i as u8).collect();
        let before = data.clone();
        let out = apply_box_blur(&data, 5, 5, 4, 1).unwrap();
        data.fill(0);
        assert_eq!(out, apply_box_blur(&before, 5, 5, 4, 1).unwrap());
    }
}
