//! Error types for qmedian-quant

use thiserror::Error;

/// Errors that can occur while registering colors or reducing them
#[derive(Debug, Error)]
pub enum QuantError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] qmedian_core::Error),

    /// Stride other than 3 or 4 bytes per color
    #[error("invalid stride: expected 3 or 4, got {0}")]
    InvalidStride(usize),

    /// Color buffer shorter than `color_count * stride`
    #[error("color buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Requested palette width of zero
    #[error("invalid palette width: {0}")]
    InvalidWidth(usize),

    /// Reduction requested with no registered colors
    #[error("empty input: no colors registered")]
    EmptyInput,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl QuantError {
    /// Check if this error reports an exhausted allocator
    pub fn is_allocation(&self) -> bool {
        matches!(self, QuantError::Core(qmedian_core::Error::AllocationFailed { .. }))
    }

    /// Check if this error reports a caller precondition violation
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            QuantError::InvalidStride(_)
            | QuantError::BufferTooSmall { .. }
            | QuantError::InvalidWidth(_)
            | QuantError::EmptyInput
            | QuantError::InvalidParameters(_) => true,
            QuantError::Core(e) => matches!(e, qmedian_core::Error::InvalidParameter(_)),
        }
    }
}

/// Result type for quantization operations
pub type QuantResult<T> = Result<T, QuantError>;
