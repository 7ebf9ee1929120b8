//! Error types for narrative export.
//!
//! All failures are represented by the [`ExportError`] enum. Row-level
//! variants carry the 1-based data row number and, when it could be read,
//! the row's `id`, so the operator can find the offending line.
//!
//! # Examples
//!
//! ```
//! use narrative_export::error::{ExportError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ExportError::invalid_config("output directory is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Location of a row in the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRef {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    /// The row's `id` cell, if it was present.
    pub id: Option<String>,
}

impl RowRef {
    pub fn new(row: usize, id: Option<String>) -> Self {
        RowRef { row, id }
    }
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "row {} (id {id})", self.row),
            None => write!(f, "row {}", self.row),
        }
    }
}

/// The main error type for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The input table does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The header row lacks a required column.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A required cell is absent or empty.
    #[error("Missing field '{field}' in {at}")]
    MissingField { at: RowRef, field: String },

    /// A cell is present but cannot be used.
    #[error("Invalid field '{field}' in {at}: {reason}")]
    InvalidField {
        at: RowRef,
        field: String,
        reason: String,
    },

    /// A data row the table reader could not parse.
    #[error("Malformed {at}: {source}")]
    MalformedRow {
        at: RowRef,
        #[source]
        source: csv::Error,
    },

    /// A requested row is past the end of the table.
    #[error("Row {requested} requested but the table has {available} data rows")]
    RowOutOfRange { requested: usize, available: usize },

    /// Some rows failed under the continue policy.
    #[error("{failed} of {total} rows failed")]
    RowFailures { failed: usize, total: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Table parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O errors (output directory, file writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Create a new missing field error.
    pub fn missing_field<S: Into<String>>(at: RowRef, field: S) -> Self {
        ExportError::MissingField {
            at,
            field: field.into(),
        }
    }

    /// Create a new invalid field error.
    pub fn invalid_field<S: Into<String>, R: Into<String>>(at: RowRef, field: S, reason: R) -> Self {
        ExportError::InvalidField {
            at,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ExportError::InvalidConfig(msg.into())
    }

    /// The row this error refers to, for row-level errors.
    pub fn row(&self) -> Option<&RowRef> {
        match self {
            ExportError::MissingField { at, .. }
            | ExportError::InvalidField { at, .. }
            | ExportError::MalformedRow { at, .. } => Some(at),
            _ => None,
        }
    }

    /// Whether the error concerns a single row rather than the whole run.
    pub fn is_row_error(&self) -> bool {
        self.row().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ExportError::missing_field(RowRef::new(3, Some("82".to_string())), "Debunking");
        assert_eq!(
            error.to_string(),
            "Missing field 'Debunking' in row 3 (id 82)"
        );

        let error = ExportError::missing_field(RowRef::new(4, None), "id");
        assert_eq!(error.to_string(), "Missing field 'id' in row 4");

        let error = ExportError::invalid_config("delimiter must be ASCII");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: delimiter must be ASCII"
        );
    }

    #[test]
    fn test_row_errors() {
        let error = ExportError::invalid_field(RowRef::new(1, Some("a/b".into())), "id", "path separator");
        assert!(error.is_row_error());
        assert_eq!(error.row().unwrap().row, 1);

        let error = ExportError::MissingColumn("Fakes".into());
        assert!(!error.is_row_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let export_error = ExportError::from(io_error);

        match export_error {
            ExportError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
