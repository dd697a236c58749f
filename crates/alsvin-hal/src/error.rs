//! Error types for the engine abstraction layer.

use thiserror::Error;

/// Errors that can occur at the engine boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Register name already present in the engine namespace.
    #[error("register already exists: {0}")]
    RegisterExists(String),

    /// Referenced register was never added.
    #[error("unknown register: {0}")]
    UnknownRegister(String),

    /// QRAM handle does not belong to this engine, or was cleared.
    #[error("invalid QRAM handle: {0}")]
    InvalidQram(u64),

    /// Width disagreement between a QRAM and its consumer.
    #[error("width mismatch: {0}")]
    WidthMismatch(String),

    /// Engine-specific failure.
    #[error("engine error: {0}")]
    Engine(String),
}

/// Result type for engine-boundary operations.
pub type HalResult<T> = Result<T, HalError>;
