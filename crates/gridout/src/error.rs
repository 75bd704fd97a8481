//! Error types for table building and export.
//!
//! This module provides [`TableError`], the error type for all export
//! operations. Empty inputs are deliberately not errors: a grid with zero
//! rows or zero columns exports as empty output, so callers can distinguish
//! "nothing to render" from genuinely unusable input.

use thiserror::Error;

/// Error type for table construction and export.
#[derive(Debug, Error)]
pub enum TableError {
    /// Source data is fundamentally unusable (e.g. records that cannot be
    /// reflected into columns).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value cannot be honored at export time, such as a
    /// metadata-row template referencing a substitution argument that was
    /// never supplied.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::InvalidInput(err.to_string())
    }
}
