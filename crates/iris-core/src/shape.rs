//! Buffer geometry.
//!
//! A [`Shape`] describes a dense, row-major, channel-interleaved `u8` image:
//!
//! ```text
//! Memory: [R G B A R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Sample `(row, col, ch)` lives at `((row * width) + col) * channels + ch`.
//!
//! A `Shape` can only be built through [`Shape::new`], so holding one means
//! the dimensions are non-zero, the channel count is 3 or 4, and the sample
//! count fits in `usize`.

use crate::{Error, Result};

/// Channel count of an RGB buffer.
pub const RGB: usize = 3;

/// Channel count of an RGBA buffer.
pub const RGBA: usize = 4;

/// Validated geometry of a pixel buffer.
///
/// # Example
///
/// ```rust
/// use iris_core::Shape;
///
/// let shape = Shape::new(640, 480, 4).unwrap();
/// assert_eq!(shape.sample_count(), 640 * 480 * 4);
/// assert_eq!(shape.index(1, 2, 3), ((1 * 640) + 2) * 4 + 3);
/// assert!(shape.has_alpha());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: usize,
    height: usize,
    channels: usize,
    samples: usize,
}

impl Shape {
    /// Creates a shape, rejecting geometry no buffer can satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if `width` or `height` is zero,
    /// `channels` is not 3 or 4, or `width * height * channels` overflows.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_shape(
                width,
                height,
                channels,
                "width and height must be > 0",
            ));
        }
        if channels != RGB && channels != RGBA {
            return Err(Error::invalid_shape(
                width,
                height,
                channels,
                "channel count must be 3 (RGB) or 4 (RGBA)",
            ));
        }
        let samples = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels))
            .ok_or_else(|| {
                Error::invalid_shape(width, height, channels, "sample count overflows usize")
            })?;

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel (3 or 4).
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `true` for RGBA buffers.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == RGBA
    }

    /// Number of pixels, `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of samples, `width * height * channels`.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Samples per row, `width * channels`.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    /// Flat offset of the first sample of pixel `(row, col)`.
    #[inline]
    pub fn pixel_offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        (row * self.width + col) * self.channels
    }

    /// Flat offset of sample `(row, col, channel)`.
    ///
    /// Bounds are checked in debug builds only.
    #[inline]
    pub fn index(&self, row: usize, col: usize, channel: usize) -> usize {
        debug_assert!(channel < self.channels, "channel {channel} out of range");
        self.pixel_offset(row, col) + channel
    }

    /// Checks that a backing store of `len` samples matches this shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] on any mismatch.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len != self.samples {
            return Err(Error::invalid_shape(
                self.width,
                self.height,
                self.channels,
                format!("expected {} samples, got {}", self.samples, len),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_valid() {
        let shape = Shape::new(3, 2, RGB).unwrap();
        assert_eq!(shape.width(), 3);
        assert_eq!(shape.height(), 2);
        assert_eq!(shape.pixel_count(), 6);
        assert_eq!(shape.sample_count(), 18);
        assert_eq!(shape.row_len(), 9);
        assert!(!shape.has_alpha());
    }

    #[test]
    fn test_shape_index() {
        let shape = Shape::new(5, 4, RGBA).unwrap();
        assert_eq!(shape.index(0, 0, 0), 0);
        assert_eq!(shape.index(0, 1, 0), 4);
        assert_eq!(shape.index(1, 0, 0), 20);
        assert_eq!(shape.index(3, 4, 3), shape.sample_count() - 1);
    }

    #[test]
    fn test_shape_rejects_zero() {
        assert!(Shape::new(0, 10, RGB).is_err());
        assert!(Shape::new(10, 0, RGBA).is_err());
    }

    #[test]
    fn test_shape_rejects_channels() {
        for channels in [0, 1, 2, 5, 8] {
            let err = Shape::new(4, 4, channels).unwrap_err();
            assert!(err.is_shape_error());
        }
    }

    #[test]
    fn test_shape_rejects_overflow() {
        assert!(Shape::new(usize::MAX, 2, RGB).is_err());
    }

    #[test]
    fn test_check_len() {
        let shape = Shape::new(2, 2, RGB).unwrap();
        assert!(shape.check_len(12).is_ok());
        let err = shape.check_len(11).unwrap_err();
        assert!(err.to_string().contains("expected 12 samples, got 11"));
    }
}
