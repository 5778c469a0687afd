//! Error types for primitive construction.
//!
//! The builders are total over finite numeric input. The only rejected input
//! is a dash pattern whose stepping lengths would never advance the cursor.

use thiserror::Error;

/// Errors that can occur while building primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkerError {
    /// A dash or gap length is zero, negative or NaN.
    #[error("{name} length must be strictly positive, got {value}")]
    InvalidDashLength {
        /// Which length was rejected ("segment" or "gap")
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

/// Result type for marker operations.
pub type Result<T> = std::result::Result<T, MarkerError>;
