//! # iris-core
//!
//! Core types for iris pixel kernels.
//!
//! This crate provides the data model shared by every iris operation:
//!
//! - [`Shape`] - validated `width x height x channels` geometry
//! - [`PixelBuffer`] - owned, dense, row-major `u8` buffer
//! - [`PixelView`], [`PixelViewMut`] - borrowed views over caller memory
//! - [`Error`] - shape validation failures
//!
//! ## Memory Layout
//!
//! Samples are stored row-major, top-to-bottom, with channels interleaved.
//! Only RGB (3) and RGBA (4) layouts are accepted; for RGBA the alpha sample
//! is the last one of each pixel.
//!
//! ## Crate Structure
//!
//! ```text
//! iris-core (this crate)
//!    ^
//!    |
//!    +-- iris-ops (grayscale, box blur)
//!    +-- iris-py (Python bindings)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod shape;

pub use buffer::{PixelBuffer, PixelView, PixelViewMut};
pub use error::{Error, Result};
pub use shape::{Shape, RGB, RGBA};
