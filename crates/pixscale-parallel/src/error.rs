//! Error types for pixscale-parallel

use thiserror::Error;

/// Errors that can occur while setting up a parallelizer
#[derive(Debug, Error)]
pub enum ParallelError {
    /// The rayon thread pool could not be built
    #[error("thread pool build failed: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// Parallelism must be at least 1
    #[error("invalid parallelism: {0}")]
    InvalidParallelism(usize),
}

/// Result type for parallelizer setup
pub type ParallelResult<T> = Result<T, ParallelError>;
