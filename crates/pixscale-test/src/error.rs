//! Error types for the test framework

use pixscale_core::Rect;
use thiserror::Error;

/// Errors that can occur while preparing or checking test images
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixscale_core::Error),

    /// Two images that should be comparable have different sizes
    #[error("size mismatch: {expected:?} vs {actual:?}")]
    SizeMismatch { expected: Rect, actual: Rect },

    /// The resize step of a round trip failed
    #[error("resize failed: {0}")]
    Resize(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
