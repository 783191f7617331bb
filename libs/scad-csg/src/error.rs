//! # CSG Errors
//!
//! Error types for solid construction.

use thiserror::Error;

/// Errors that can occur while building a solid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsgError {
    /// A primitive size was zero, negative or not finite.
    #[error("Invalid {parameter}: expected a positive length, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value that was rejected.
        value: f64,
    },

    /// A rotation axis had zero length or non-finite components.
    #[error("Invalid rotation axis: {0:?}")]
    InvalidAxis([f64; 3]),

    /// An angle or offset was not finite.
    #[error("Invalid {parameter}: value is not finite")]
    NonFinite {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// A boolean operation was given no operands.
    #[error("Empty {operation}: at least one operand is required")]
    EmptyComposite {
        /// Name of the boolean operation.
        operation: &'static str,
    },
}

/// Result type alias for solid construction.
pub type CsgResult<T> = Result<T, CsgError>;

// =============================================================================
// TESTS
// =============================================================================
