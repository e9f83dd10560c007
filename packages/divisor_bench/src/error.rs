use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing or running the benchmark.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided an iteration budget that is not a positive base-10 integer.
    #[error("invalid iteration budget: '{value}' is invalid: {problem}")]
    InvalidBudget {
        /// The argument exactly as the caller provided it.
        value: String,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// The numbers file could not be opened or read.
    #[error("failed to read numbers file '{}': {source}", path.display())]
    FileRead {
        /// The file we attempted to read.
        path: PathBuf,

        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The numbers file ended before the expected number of bytes could be read.
    #[error(
        "numbers file '{}' is truncated: expected {expected} bytes but only {actual} are available",
        path.display()
    )]
    Truncated {
        /// The file we attempted to read.
        path: PathBuf,

        /// How many bytes a complete file contains.
        expected: usize,

        /// How many bytes were actually available.
        actual: usize,
    },
}

/// A specialized `Result` type for benchmark operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
