//! Pixel buffer types.
//!
//! - [`PixelBuffer`] - owned buffer, returned by operations that allocate
//! - [`PixelView`] - shared borrow of caller memory, the input of windowed filters
//! - [`PixelViewMut`] - exclusive borrow of caller memory, the target of in-place ops
//!
//! # Ownership
//!
//! The split between shared and exclusive views is the aliasing contract of
//! the operations built on top of them. An in-place operation takes a
//! [`PixelViewMut`] and writes back into the caller's memory. A windowed
//! operation reads neighbours of every pixel, so it takes a [`PixelView`] and
//! returns a fresh [`PixelBuffer`]; the borrow checker rules out passing the
//! same memory as both source and destination.
//!
//! # Usage
//!
//! ```rust
//! use iris_core::{PixelBuffer, PixelView};
//!
//! let samples = vec![10u8, 20, 30, 40, 50, 60];
//! let view = PixelView::new(&samples, 2, 1, 3).unwrap();
//! assert_eq!(view.pixel(0, 1), &[40, 50, 60]);
//!
//! let owned: PixelBuffer = view.to_buffer();
//! assert_eq!(owned.as_slice(), samples.as_slice());
//! ```

use crate::{Result, Shape};

/// Owned, contiguous pixel buffer.
///
/// # Example
///
/// ```rust
/// use iris_core::{PixelBuffer, Shape};
///
/// let shape = Shape::new(4, 4, 4).unwrap();
/// let buf = PixelBuffer::filled(shape, &[255, 0, 0, 255]).unwrap();
/// assert_eq!(buf.pixel(3, 3), &[255, 0, 0, 255]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    shape: Shape,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer.
    pub fn zeroed(shape: Shape) -> Self {
        Self {
            data: vec![0u8; shape.sample_count()],
            shape,
        }
    }

    /// Wraps existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidShape`] if the dimensions are invalid
    /// or `data.len() != width * height * channels`.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, channels: usize) -> Result<Self> {
        let shape = Shape::new(width, height, channels)?;
        Self::from_shape(data, shape)
    }

    /// Wraps existing samples with an already validated shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidShape`] if `data.len()` differs from
    /// `shape.sample_count()`.
    pub fn from_shape(data: Vec<u8>, shape: Shape) -> Result<Self> {
        shape.check_len(data.len())?;
        Ok(Self { data, shape })
    }

    /// Creates a buffer with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidShape`] if `pixel.len()` differs from
    /// the channel count.
    pub fn filled(shape: Shape, pixel: &[u8]) -> Result<Self> {
        if pixel.len() != shape.channels() {
            return Err(crate::Error::invalid_shape(
                shape.width(),
                shape.height(),
                shape.channels(),
                format!("fill pixel has {} samples", pixel.len()),
            ));
        }
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(shape.sample_count())
            .collect();
        Ok(Self { data, shape })
    }

    /// Returns the buffer geometry.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.shape.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.shape.height()
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.shape.channels()
    }

    /// Raw samples.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Raw samples, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns its samples.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Sample at `(row, col, channel)`.
    #[inline]
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> u8 {
        self.data[self.shape.index(row, col, channel)]
    }

    /// All samples of pixel `(row, col)`.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let start = self.shape.pixel_offset(row, col);
        &self.data[start..start + self.shape.channels()]
    }

    /// Samples of row `row`.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let len = self.shape.row_len();
        &self.data[row * len..(row + 1) * len]
    }

    /// Borrows the buffer as a read-only view.
    #[inline]
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            shape: self.shape,
        }
    }

    /// Borrows the buffer as a mutable view.
    #[inline]
    pub fn view_mut(&mut self) -> PixelViewMut<'_> {
        PixelViewMut {
            data: &mut self.data,
            shape: self.shape,
        }
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.shape.width())
            .field("height", &self.shape.height())
            .field("channels", &self.shape.channels())
            .finish()
    }
}

/// Read-only view over caller-owned samples.
#[derive(Clone, Copy)]
pub struct PixelView<'a> {
    data: &'a [u8],
    shape: Shape,
}

impl<'a> PixelView<'a> {
    /// Wraps a sample slice.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidShape`] if the dimensions are invalid
    /// or the slice length does not match them.
    pub fn new(data: &'a [u8], width: usize, height: usize, channels: usize) -> Result<Self> {
        Self::from_shape(data, Shape::new(width, height, channels)?)
    }

    /// Wraps a sample slice with an already validated shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidShape`] if `data.len()` differs from
    /// `shape.sample_count()`.
    pub fn from_shape(data: &'a [u8], shape: Shape) -> Result<Self> {
        shape.check_len(data.len())?;
        Ok(Self { data, shape })
    }

    /// Returns the view geometry.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Raw samples.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Sample at `(row, col, channel)`.
    #[inline]
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> u8 {
        self.data[self.shape.index(row, col, channel)]
    }

    /// All samples of pixel `(row, col)`.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &'a [u8] {
        let start = self.shape.pixel_offset(row, col);
        &self.data[start..start + self.shape.channels()]
    }

    /// Samples of row `row`.
    #[inline]
    pub fn row(&self, row: usize) -> &'a [u8] {
        let len = self.shape.row_len();
        &self.data[row * len..(row + 1) * len]
    }

    /// Iterates over rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'a, u8> {
        self.data.chunks_exact(self.shape.row_len())
    }

    /// Copies the samples into an owned buffer.
    pub fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            data: self.data.to_vec(),
            shape: self.shape,
        }
    }
}

impl std::fmt::Debug for PixelView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelView")
            .field("width", &self.shape.width())
            .field("height", &self.shape.height())
            .field("channels", &self.shape.channels())
            .finish()
    }
}

/// Mutable view over caller-owned samples.
///
/// # Example
///
/// ```rust
/// use iris_core::PixelViewMut;
///
/// let mut samples = vec![0u8; 2 * 2 * 4];
/// let mut view = PixelViewMut::new(&mut samples, 2, 2, 4).unwrap();
/// view.pixel_mut(1, 1).copy_from_slice(&[1, 2, 3, 4]);
/// assert_eq!(&samples[12..], &[1, 2, 3, 4]);
/// ```
pub struct PixelViewMut<'a> {
    data: &'a mut [u8],
    shape: Shape,
}

impl<'a> PixelViewMut<'a> {
    /// Wraps a mutable sample slice.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidShape`] if the dimensions are invalid
    /// or the slice length does not match them.
    pub fn new(data: &'a mut [u8], width: usize, height: usize, channels: usize) -> Result<Self> {
        Self::from_shape(data, Shape::new(width, height, channels)?)
    }

    /// Wraps a mutable sample slice with an already validated shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidShape`] if `data.len()` differs from
    /// `shape.sample_count()`.
    pub fn from_shape(data: &'a mut [u8], shape: Shape) -> Result<Self> {
        shape.check_len(data.len())?;
        Ok(Self { data, shape })
    }

    /// Returns the view geometry.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Raw samples.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &*self.data
    }

    /// Raw samples, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// All samples of pixel `(row, col)`, mutable.
    #[inline]
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut [u8] {
        let start = self.shape.pixel_offset(row, col);
        let channels = self.shape.channels();
        &mut self.data[start..start + channels]
    }

    /// Iterates over pixels in row-major order.
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let channels = self.shape.channels();
        self.data.chunks_exact_mut(channels)
    }
}

impl std::fmt::Debug for PixelViewMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelViewMut")
            .field("width", &self.shape.width())
            .field("height", &self.shape.height())
            .field("channels", &self.shape.channels())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = PixelBuffer::from_vec(vec![0; 10], 2, 2, 3).unwrap_err();
        assert!(err.is_shape_error());
        assert!(PixelBuffer::from_vec(vec![0; 12], 2, 2, 3).is_ok());
    }

    #[test]
    fn test_filled() {
        let shape = Shape::new(3, 2, 3).unwrap();
        let buf = PixelBuffer::filled(shape, &[1, 2, 3]).unwrap();
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(buf.pixel(row, col), &[1, 2, 3]);
            }
        }
        assert!(PixelBuffer::filled(shape, &[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_row_access() {
        let data: Vec<u8> = (0..24).collect();
        let buf = PixelBuffer::from_vec(data, 2, 3, 4).unwrap();
        assert_eq!(buf.row(1), &[8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(buf.sample(2, 1, 3), 23);
        assert_eq!(buf.view().rows().count(), 3);
    }

    #[test]
    fn test_view_mut_writes_through() {
        let mut data = vec![0u8; 3 * 3];
        {
            let mut view = PixelViewMut::new(&mut data, 3, 1, 3).unwrap();
            for px in view.pixels_mut() {
                px[1] = 7;
            }
        }
        assert_eq!(data, vec![0, 7, 0, 0, 7, 0, 0, 7, 0]);
    }

    #[test]
    fn test_view_rejects_bad_length() {
        let data = vec![0u8; 15];
        assert!(PixelView::new(&data, 2, 2, 4).is_err());
        let mut data = vec![0u8; 15];
        assert!(PixelViewMut::new(&mut data, 2, 2, 4).is_err());
    }
}
