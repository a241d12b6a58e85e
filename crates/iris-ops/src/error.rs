//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Buffer geometry is inconsistent with its samples.
    #[error(transparent)]
    InvalidShape(#[from] iris_core::Error),

    /// Blur radius is negative.
    #[error("invalid radius: {0} (must be >= 0)")]
    InvalidRadius(i64),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
