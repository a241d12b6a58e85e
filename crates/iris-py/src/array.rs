//! numpy array interop helpers.

use numpy::{IntoPyArray, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use iris_ops::{OpsError, PixelBuffer};

/// `(height, width, channels)` from the shape of a 3-D array.
pub(crate) fn dims(shape: &[usize]) -> (usize, usize, usize) {
    (shape[0], shape[1], shape[2])
}

/// Maps an operation error to a Python `ValueError`.
pub(crate) fn ops_err(err: OpsError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Error for arrays whose memory is not one C-ordered block.
pub(crate) fn not_contiguous(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(format!("array must be C-contiguous: {}", err))
}

/// Moves a buffer into a new `(height, width, channels)` uint8 array.
pub(crate) fn buffer_to_array(
    py: Python<'_>,
    buf: PixelBuffer,
) -> PyResult<Bound<'_, PyArray3<u8>>> {
    let (h, w, c) = (buf.height(), buf.width(), buf.channels());
    buf.into_vec()
        .into_pyarray(py)
        .reshape([h, w, c])
        .map_err(|e| PyValueError::new_err(format!("Reshape failed: {}", e)))
}
