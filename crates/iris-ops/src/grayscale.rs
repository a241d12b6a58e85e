//! In-place grayscale conversion.
//!
//! Each pixel's R, G and B samples are replaced by the truncated unweighted
//! mean `(R + G + B) / 3`. Alpha, when present, is left as it was.
//!
//! # Example
//!
//! ```rust
//! use iris_core::PixelViewMut;
//! use iris_ops::grayscale::convert;
//!
//! let mut samples = vec![30u8, 60, 90, 200];
//! let mut view = PixelViewMut::new(&mut samples, 1, 1, 4).unwrap();
//! convert(&mut view);
//! assert_eq!(samples, vec![60, 60, 60, 200]);
//! ```

use iris_core::PixelViewMut;
use tracing::trace;

/// Unweighted luminance of one RGB triple, truncated toward zero.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    // Max sum is 765, so u16 cannot overflow and the mean fits in u8.
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Converts a single pixel in place. Samples past the third are untouched.
#[inline]
pub(crate) fn convert_pixel(px: &mut [u8]) {
    let l = luminance(px[0], px[1], px[2]);
    px[..3].fill(l);
}

/// Converts every pixel of `view` to grayscale in place.
///
/// Performs no allocation. Applying it twice gives the same result as once.
pub fn convert(view: &mut PixelViewMut<'_>) {
    let shape = view.shape();
    trace!(
        width = shape.width(),
        height = shape.height(),
        channels = shape.channels(),
        "grayscale"
    );

    for px in view.pixels_mut() {
        convert_pixel(px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_core::PixelBuffer;

    #[test]
    fn test_luminance_truncates() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(1, 1, 0), 0);
        assert_eq!(luminance(2, 2, 1), 1);
        assert_eq!(luminance(255, 255, 254), 254);
    }

    #[test]
    fn test_convert_rgb() {
        let mut buf = PixelBuffer::from_vec(vec![10, 20, 30, 255, 0, 0], 2, 1, 3).unwrap();
        convert(&mut buf.view_mut());
        assert_eq!(buf.as_slice(), &[20, 20, 20, 85, 85, 85]);
    }

    #[test]
    fn test_convert_preserves_alpha() {
        let data = vec![100, 150, 200, 7, 9, 9, 9, 0, 255, 254, 253, 128];
        let mut buf = PixelBuffer::from_vec(data, 3, 1, 4).unwrap();
        convert(&mut buf.view_mut());
        assert_eq!(buf.pixel(0, 0), &[150, 150, 150, 7]);
        assert_eq!(buf.pixel(0, 1), &[9, 9, 9, 0]);
        assert_eq!(buf.pixel(0, 2), &[254, 254, 254, 128]);
    }

    #[test]
    fn test_convert_idempotent() {
        let data: Vec<u8> = (0..4 * 3 * 4).map(|i| (i * 37 % 256) as u8).collect();
        let mut once = PixelBuffer::from_vec(data, 4, 3, 4).unwrap();
        convert(&mut once.view_mut());
        let mut twice = once.clone();
        convert(&mut twice.view_mut());
        assert_eq!(once, twice);
    }
}
