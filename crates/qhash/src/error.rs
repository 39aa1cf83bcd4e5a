//! Error types for the digest pipeline.

use thiserror::Error;

/// Errors produced while computing a digest.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HashError {
    /// Input contained no bytes.
    #[error("empty input not supported")]
    EmptyInput,

    /// Requested digest is wider than the construction supports.
    #[error("output size {requested} bits exceeds maximum of {max} bits")]
    OutputTooLarge {
        /// Requested digest width in bits.
        requested: u32,
        /// Maximum digest width in bits.
        max: u32,
    },

    /// Requested digest width is zero or not a whole number of bytes.
    #[error("output size must be a positive multiple of 8 bits, got {0}")]
    InvalidOutputSize(u32),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qhash_ir::IrError),

    /// Simulator returned an error.
    #[error("Simulation error: {0}")]
    Sim(#[from] qhash_sim::SimError),
}

impl HashError {
    /// Whether the caller passed a bad argument, as opposed to an internal
    /// failure further down the pipeline.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            HashError::EmptyInput
                | HashError::OutputTooLarge { .. }
                | HashError::InvalidOutputSize(_)
        )
    }
}

/// Result type for digest operations.
pub type HashResult<T> = Result<T, HashError>;
