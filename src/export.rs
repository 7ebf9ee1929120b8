//! Batch export of a narrative table.
//!
//! [`Exporter`] drives one run: it opens the input table, maps each row in
//! table order, and hands every document to a [`DocumentSink`]. Rows are
//! independent of each other; nothing is carried from one row to the next.
//!
//! # Failure handling
//!
//! Under [`FailurePolicy::FailFast`] the first row that cannot be mapped ends
//! the run with that row's error. Under [`FailurePolicy::Continue`] the row is
//! recorded in the summary and the run goes on. Errors that are not about a
//! single row (missing input, missing columns, unwritable output) always end
//! the run.
//!
//! # Examples
//!
//! ```no_run
//! use narrative_export::config::ExportConfig;
//! use narrative_export::export::Exporter;
//!
//! let config = ExportConfig::new("data/narratives.csv").with_output_dir("out");
//! let summary = Exporter::new(config).unwrap().run().unwrap();
//! println!("{} documents written", summary.documents_written);
//! ```

use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{ExportConfig, FailurePolicy};
use crate::document::converter::RowConverter;
use crate::document::mapper::DocumentMapper;
use crate::document::record::RawRow;
use crate::error::{ExportError, Result};

pub mod writer;

use writer::{DirectoryWriter, DocumentSink, DryRunSink};

/// A row that was skipped under [`FailurePolicy::Continue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    pub row: usize,
    pub id: Option<String>,
    pub message: String,
}

/// Outcome of an export run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSummary {
    pub input: String,
    /// `None` for dry runs.
    pub output_dir: Option<String>,
    pub rows_read: usize,
    pub documents_written: usize,
    pub failures: Vec<RowFailure>,
    pub duration_ms: u64,
}

impl ExportSummary {
    /// Whether every row was converted.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn recorded row failures into an error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ExportError::RowFailures {
                failed: self.failures.len(),
                total: self.rows_read,
            })
        }
    }
}

/// Runs exports described by an [`ExportConfig`].
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExportConfig,
    mapper: DocumentMapper,
}

impl Exporter {
    /// Create an exporter after validating the configuration.
    pub fn new(config: ExportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Exporter {
            config,
            mapper: DocumentMapper::new(),
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Run the export against the configured input and output.
    ///
    /// The input is opened before the output directory is touched, so a
    /// missing input leaves the filesystem unchanged.
    pub fn run(&self) -> Result<ExportSummary> {
        let rows = self.config.row_converter().convert(&self.config.input)?;

        info!("Reading narratives from {}", self.config.input.display());

        if self.config.dry_run {
            let mut sink = DryRunSink::new();
            let summary = self.run_with(rows, &mut sink)?;
            debug!("Dry run encoded {} bytes", sink.bytes());
            Ok(summary)
        } else {
            let mut sink = DirectoryWriter::new(&self.config.output_dir)?;
            let mut summary = self.run_with(rows, &mut sink)?;
            summary.output_dir = Some(display(sink.directory()));
            info!(
                "Wrote {} documents to {}",
                summary.documents_written,
                sink.directory().display()
            );
            Ok(summary)
        }
    }

    /// Map every row and write the results to `sink`.
    pub fn run_with<I, S>(&self, rows: I, sink: &mut S) -> Result<ExportSummary>
    where
        I: IntoIterator<Item = Result<RawRow>>,
        S: DocumentSink + ?Sized,
    {
        let start_time = Instant::now();
        let mut summary = ExportSummary {
            input: display(&self.config.input),
            ..Default::default()
        };

        for row in rows {
            summary.rows_read += 1;

            let mapped = row.and_then(|raw| self.mapper.map_row(&raw));
            let mapped = match mapped {
                Ok(mapped) => mapped,
                Err(e) => {
                    self.handle_failure(&mut summary, e)?;
                    continue;
                }
            };

            sink.write(&mapped)?;
            summary.documents_written += 1;
            debug!("Row {} -> {}", summary.rows_read, mapped.file_name);
        }

        summary.duration_ms = start_time.elapsed().as_millis() as u64;
        Ok(summary)
    }

    /// Record or propagate a row that could not be mapped.
    fn handle_failure(&self, summary: &mut ExportSummary, error: ExportError) -> Result<()> {
        if self.config.failure_policy == FailurePolicy::FailFast {
            return Err(error);
        }
        let Some(at) = error.row().cloned() else {
            return Err(error);
        };

        warn!("Skipping {at}: {error}");
        summary.failures.push(RowFailure {
            row: at.row,
            id: at.id,
            message: error.to_string(),
        });
        Ok(())
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
