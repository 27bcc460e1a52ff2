use thiserror::Error;

/// Errors returned by clustering in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
