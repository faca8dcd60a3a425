//! Error types for pixscale-scale

use thiserror::Error;

/// Errors that can occur while drawing a scaled rectangle
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixscale_core::Error),

    /// Invalid drawing parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Row range with start after end
    #[error("invalid row range: {start} > {end}")]
    InvalidRowRange { start: i32, end: i32 },
}

/// Result type for scaling operations
pub type ScaleResult<T> = Result<T, ScaleError>;
