//! Error types for algobench

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Algobench error types
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create or write an output file. Fatal to the run:
    /// measurements are worthless if they cannot be recorded.
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
}
