//! Error types for iris-core buffer handling.
//!
//! The core data model only fails in one way: a caller hands over geometry
//! that does not describe the samples it supplied. All such failures are
//! reported as [`Error::InvalidShape`].
//!
//! # Usage
//!
//! ```rust
//! use iris_core::{Error, Result};
//!
//! fn check(width: usize, height: usize) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_shape(width, height, 4, "empty image"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0, 10).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::Shape`] - geometry validation
//! - [`crate::buffer::PixelView`] / [`crate::buffer::PixelViewMut`] - length checks
//! - `iris-ops` - wrapped into `OpsError::InvalidShape`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing or wrapping a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Buffer geometry is inconsistent.
    ///
    /// Returned when width or height is zero, the channel count is not
    /// 3 (RGB) or 4 (RGBA), `width * height * channels` overflows, or the
    /// sample count differs from `width * height * channels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iris_core::Error;
    ///
    /// let err = Error::invalid_shape(4, 4, 2, "unsupported channel count");
    /// assert!(err.to_string().contains("4x4x2"));
    /// ```
    #[error("invalid shape {width}x{height}x{channels}: {reason}")]
    InvalidShape {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Declared channel count
        channels: usize,
        /// What is wrong with it
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(
        width: usize,
        height: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidShape {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a shape error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::InvalidShape { .. })
    }
}
