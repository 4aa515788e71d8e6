//! Error types for qmedian-core
//!
//! Provides a unified error type for the color and palette containers.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// qmedian-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Palette has no room for another entry
    #[error("palette is full: {max_entries} entries")]
    PaletteFull { max_entries: usize },

    /// Memory allocation failed
    #[error("memory allocation failed: {requested} elements")]
    AllocationFailed { requested: usize },
}

/// Result type alias for qmedian-core operations
pub type Result<T> = std::result::Result<T, Error>;
