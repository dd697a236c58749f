//! Error types for the encoding core.

use thiserror::Error;

/// Errors produced while encoding a classical linear system.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// Input matrix is not square.
    #[error("matrix must be square, got {rows}×{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// Matrix dimension and right-hand-side length disagree.
    #[error("matrix dimension {matrix_dim} does not match vector length {vector_len}")]
    DimensionMismatch {
        /// Side length of the matrix.
        matrix_dim: usize,
        /// Length of the right-hand-side vector.
        vector_len: usize,
    },

    /// Recovery was handed a vector of an unexpected length.
    #[error("recovery expected a vector of length {expected}, got {got}")]
    RecoveryDimension {
        /// Length the recovery map requires at this stage.
        expected: usize,
        /// Length it received.
        got: usize,
    },

    /// A scheduling parameter was non-positive or non-finite.
    #[error("{name} must be positive and finite, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Fixed-point bit width outside the supported 1..=64 range.
    #[error("bit width must be in 1..=64, got {0}")]
    InvalidBitWidth(u32),
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
