//! Error types for digitwalk-core
//!
//! Provides a unified error type for all operations in the core crate.
//! User-input problems (`InvalidArgument`, `Overflow`) are kept apart from
//! `InvariantViolation`, which signals a defect inside the library rather
//! than bad input.

use thiserror::Error;

/// Digitwalk error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument supplied by the caller
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Integer range exceeded while deriving a bound, coordinate or count
    #[error("integer overflow: {0}")]
    Overflow(&'static str),

    /// Internal invariant broken; indicates a bug, not bad input
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Whether this error was caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::InvariantViolation(_))
    }
}

/// Result type alias for digitwalk operations
pub type Result<T> = std::result::Result<T, Error>;
