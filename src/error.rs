//! Error types for unroll-bench
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// unroll-bench error types
#[derive(Error, Debug)]
pub enum Error {
    /// Element count argument missing from the command line
    #[error("spec el count")]
    MissingElementCount,

    /// Element count argument is not a valid non-negative integer
    #[error("invalid element count {input:?}: {reason}")]
    InvalidElementCount {
        /// Raw argument text
        input: String,
        /// Parse failure detail
        reason: String,
    },

    /// Buffer handed to a fixed-size update routine is shorter than its bound
    #[error("buffer too small for fixed-size update: need {required} elements, got {actual}")]
    BufferTooSmall {
        /// Elements the routine unconditionally touches
        required: usize,
        /// Elements actually present
        actual: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
