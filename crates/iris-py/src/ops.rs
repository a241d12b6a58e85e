//! Pixel operations for Python.
//!
//! Arrays are `numpy.uint8` with shape `(height, width, channels)`, where
//! `channels` is 3 (RGB) or 4 (RGBA).

use numpy::{PyArray3, PyReadonlyArray3, PyReadwriteArray3, PyUntypedArrayMethods};
use pyo3::prelude::*;

use crate::array::{buffer_to_array, dims, not_contiguous, ops_err};

/// Convert an RGB(A) image to grayscale in place.
///
/// R, G and B of every pixel become `(R + G + B) // 3`; alpha is kept.
///
/// Args:
///     image: Writable, C-contiguous uint8 array (H, W, 3|4)
///
/// Raises:
///     ValueError: on unsupported channel count or non-contiguous memory
///
/// Example:
///     >>> iris.convert_to_grayscale(pixels)  # pixels is modified
#[pyfunction]
#[pyo3(signature = (image))]
pub fn convert_to_grayscale(mut image: PyReadwriteArray3<'_, u8>) -> PyResult<()> {
    let (h, w, c) = dims(image.shape());
    let data = image.as_slice_mut().map_err(not_contiguous)?;
    iris_ops::convert_to_grayscale(data, w, h, c).map_err(ops_err)
}

/// Apply a box blur with a clipped square window.
///
/// Every output sample is the truncated mean of the `(2*radius+1)^2`
/// neighbourhood that lies inside the image. The input is not modified.
///
/// Args:
///     image: C-contiguous uint8 array (H, W, 3|4)
///     radius: Window half-width in pixels (>= 0)
///
/// Returns:
///     New uint8 array with the same shape
///
/// Raises:
///     ValueError: on negative radius, bad shape or non-contiguous memory
#[pyfunction]
#[pyo3(signature = (image, radius))]
pub fn apply_box_blur<'py>(
    py: Python<'py>,
    image: PyReadonlyArray3<'py, u8>,
    radius: i64,
) -> PyResult<Bound<'py, PyArray3<u8>>> {
    let (h, w, c) = dims(image.shape());
    let input = image.as_slice().map_err(not_contiguous)?.to_vec();

    let blurred = py
        .allow_threads(move || iris_ops::apply_box_blur(&input, w, h, c, radius))
        .map_err(ops_err)?;
    buffer_to_array(py, blurred)
}

/// Naive box blur, for benchmarking against `apply_box_blur`.
///
/// Same result, `O(radius^2)` work per pixel.
///
/// Args:
///     image: C-contiguous uint8 array (H, W, 3|4)
///     radius: Window half-width in pixels (>= 0)
///
/// Returns:
///     New uint8 array with the same shape
#[pyfunction]
#[pyo3(signature = (image, radius))]
pub fn apply_box_blur_reference<'py>(
    py: Python<'py>,
    image: PyReadonlyArray3<'py, u8>,
    radius: i64,
) -> PyResult<Bound<'py, PyArray3<u8>>> {
    let (h, w, c) = dims(image.shape());
    let input = image.as_slice().map_err(not_contiguous)?.to_vec();

    let blurred = py
        .allow_threads(move || {
            let radius = iris_ops::check_radius(radius)?;
            let view = iris_ops::PixelView::new(&input, w, h, c)?;
            Ok::<_, iris_ops::OpsError>(iris_ops::reference::box_blur(view, radius))
        })
        .map_err(ops_err)?;
    buffer_to_array(py, blurred)
}

/// Register pixel operations.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert_to_grayscale, m)?)?;
    m.add_function(wrap_pyfunction!(apply_box_blur, m)?)?;
    m.add_function(wrap_pyfunction!(apply_box_blur_reference, m)?)?;
    Ok(())
}
