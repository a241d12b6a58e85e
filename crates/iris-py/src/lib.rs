//! Python bindings for iris.
//!
//! Exposes the iris pixel kernels as the `iris` extension module via PyO3.
//!
//! ```python
//! import numpy as np
//! import iris
//!
//! pixels = np.asarray(img.convert("RGBA"), dtype=np.uint8)
//! iris.convert_to_grayscale(pixels)
//! blurred = iris.apply_box_blur(pixels, 5)
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

mod array;
mod ops;

/// Add two integers.
///
/// Example:
///     >>> iris.add(10, 25)
///     35
#[pyfunction]
#[pyo3(signature = (a, b))]
fn add(a: i64, b: i64) -> i64 {
    iris_ops::add(a, b)
}

/// Route `tracing` output from the kernels to stderr.
///
/// Args:
///     filter: `EnvFilter` directive, e.g. "info" or "iris_ops=trace"
///
/// Raises:
///     ValueError: if the directive does not parse
///     RuntimeError: if a subscriber is already installed
#[pyfunction]
#[pyo3(signature = (filter="info"))]
fn init_logging(filter: &str) -> PyResult<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| PyValueError::new_err(format!("Invalid log filter '{}': {}", filter, e)))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PyRuntimeError::new_err(format!("Logging already initialized: {}", e)))?;
    tracing::debug!("iris logging initialized");
    Ok(())
}

/// iris - native pixel kernels for Python
#[pymodule]
fn iris(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(add, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    ops::register(m)?;

    Ok(())
}
