//! Error types for the test support crate

use thiserror::Error;

/// Errors that can occur while preparing or checking a regression test
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture could not be built
    #[error("invalid fixture: {0}")]
    Fixture(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
