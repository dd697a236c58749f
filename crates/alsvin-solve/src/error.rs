//! Error types for the solve pipeline.

use alsvin_encode::EncodeError;
use alsvin_hal::HalError;
use thiserror::Error;

/// Errors surfaced by a `solve` call.
///
/// A failure aborts the whole call; the register scope guarantees no
/// partial engine state survives it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SolveError {
    /// Encoding-stage failure.
    #[error("encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// Engine-boundary failure.
    #[error("engine error: {0}")]
    Hal(#[from] HalError),
}

/// Result type for solve operations.
pub type SolveResult<T> = Result<T, SolveError>;
