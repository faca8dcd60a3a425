//! Error types for pixscale-core
//!
//! Provides a unified error type for the value types and pixel access
//! traits of the core crate.

use crate::Rect;
use thiserror::Error;

/// pixscale-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pixel coordinates outside of the addressable rectangle
    #[error("({x}, {y}) out of range of {rect:?}")]
    OutOfRange { x: i32, y: i32, rect: Rect },

    /// Invalid channel mask configuration
    #[error("invalid color mask: {0}")]
    InvalidColorMask(String),
}

/// Result type alias for pixscale-core operations
pub type Result<T> = std::result::Result<T, Error>;
