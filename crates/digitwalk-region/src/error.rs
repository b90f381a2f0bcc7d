//! Error types for digitwalk-region

use thiserror::Error;

/// Errors that can occur during region counting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] digitwalk_core::Error),

    /// Quadrant descriptor with steps outside {-1, 0, 1} or both zero
    #[error("invalid quadrant '{label}': start ({start_x}, {start_y}), step ({step_x}, {step_y})")]
    InvalidQuadrant {
        label: &'static str,
        start_x: i32,
        start_y: i32,
        step_x: i32,
        step_y: i32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Two counting methods disagreed
    #[error("count mismatch: {method} gave {actual}, expected {expected}")]
    CountMismatch {
        method: &'static str,
        expected: u64,
        actual: u64,
    },
}

impl RegionError {
    /// Whether this error was caused by the caller's input.
    ///
    /// Count mismatches and core invariant violations point at a bug in the
    /// counter itself.
    pub fn is_input_error(&self) -> bool {
        match self {
            RegionError::Core(e) => e.is_input_error(),
            RegionError::InvalidQuadrant { .. } | RegionError::InvalidParameters(_) => true,
            RegionError::CountMismatch { .. } => false,
        }
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
