//! Configuration for export runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::document::converter::csv::CsvRowConverter;
use crate::error::{ExportError, Result};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output_json_files";

/// What to do when a row cannot be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the run on the first bad row.
    #[default]
    FailFast,
    /// Record the failure, keep converting, and fail the run at the end.
    Continue,
}

/// Configuration for one export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Input table.
    pub input: PathBuf,

    /// Directory receiving one file per row.
    pub output_dir: PathBuf,

    /// Cell delimiter byte.
    pub delimiter: u8,

    /// Whether to trim whitespace around cells.
    pub trim: bool,

    /// Handling of rows that fail validation.
    pub failure_policy: FailurePolicy,

    /// Map and encode every row without writing files.
    pub dry_run: bool,
}

impl ExportConfig {
    /// Create a configuration with defaults for everything but the input.
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            delimiter: b',',
            trim: false,
            failure_policy: FailurePolicy::FailFast,
            dry_run: false,
        }
    }

    /// Set the output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set cell trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Enable or disable dry runs.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(ExportError::invalid_config("input path is empty"));
        }
        if !self.dry_run && self.output_dir.as_os_str().is_empty() {
            return Err(ExportError::invalid_config("output directory is empty"));
        }
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(ExportError::invalid_config(format!(
                "unusable delimiter {:?}",
                self.delimiter as char
            )));
        }
        Ok(())
    }

    /// Build the table reader this configuration describes.
    pub fn row_converter(&self) -> CsvRowConverter {
        CsvRowConverter::new()
            .with_delimiter(self.delimiter)
            .with_trim(self.trim)
    }
}

/// Parse a delimiter given as a single ASCII character, or `\t`/`tab`.
pub fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
            }
        }
    }
}
