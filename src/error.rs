//! Error types for heated_plate

use thiserror::Error;

/// Result type alias using heated_plate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or running a solve
#[derive(Error, Debug)]
pub enum Error {
    /// Grid without interior cells, or too large to index
    #[error("Invalid grid dimension {rows}x{cols}: rows and columns must each be between 3 and 2147483647 and the cell count must fit in usize")]
    InvalidDimension {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// A run needs at least one worker
    #[error("Invalid thread count: at least one thread is required")]
    InvalidThreadCount,

    /// Parallel tasks need a non-empty chunk
    #[error("Invalid chunk size: must be at least 1")]
    InvalidChunkSize,

    /// Tolerance that no diff can ever satisfy
    #[error("Invalid tolerance {0}: must be a non-negative number")]
    InvalidTolerance(f64),

    /// Optional iteration cap was reached before convergence
    #[error("No convergence after {iterations} iterations, last diff {diff}")]
    IterationLimit {
        /// Completed iterations
        iterations: usize,
        /// Diff of the last completed iteration
        diff: f64,
    },

    /// The run's worker pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
