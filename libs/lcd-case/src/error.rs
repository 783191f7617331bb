//! # Case Errors
//!
//! Error types for building and exporting the display case.
//!
//! ## Error Policy
//!
//! - Malformed dimensions fail before any geometry is built
//! - Every error names the offending parameter or path
//! - Export I/O failures are returned as-is, never retried

use std::path::PathBuf;

use scad_csg::CsgError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A dimension set that would produce invalid geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    /// A measured length is zero, negative or not finite.
    #[error("Invalid {parameter}: expected a positive length, got {value}")]
    NonPositive {
        /// Name of the offending dimension.
        parameter: &'static str,
        /// Value that was rejected.
        value: f64,
    },

    /// A derived length falls outside the panel envelope.
    #[error("Inconsistent {parameter}: {reason}")]
    Inconsistent {
        /// Name of the dimension that breaks the envelope.
        parameter: &'static str,
        /// What the derived size violates.
        reason: String,
    },
}

/// Errors that can occur while building or exporting a scene.
#[derive(Debug, Error)]
pub enum CaseError {
    /// Dimension set failed validation.
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// A primitive or transform could not be built.
    #[error("Geometry error: {0}")]
    Geometry(#[from] CsgError),

    /// No scene variant has the given name.
    #[error("Unknown scene variant: {0}")]
    UnknownVariant(String),

    /// Writing the exported scene failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for case operations.
pub type CaseResult<T> = Result<T, CaseError>;

// =============================================================================
// TESTS
// =============================================================================
