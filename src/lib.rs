//! # narrative-export
//!
//! Converts a table of misinformation narratives into one JSON document per
//! row, in the upload schema of a document-indexing service.
//!
//! ## Features
//!
//! - CSV input with typed, validated rows
//! - Paragraph markup cleanup of debunking text
//! - Byte-stable document files, one per row
//! - Fail-fast or keep-going failure handling

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod export;

pub mod prelude {
    pub use crate::config::{ExportConfig, FailurePolicy};
    pub use crate::document::mapper::{DocumentMapper, MappedDocument};
    pub use crate::document::record::{NarrativeRecord, RawRow};
    pub use crate::document::upload::{Section, UploadDocument};
    pub use crate::error::{ExportError, Result};
    pub use crate::export::{ExportSummary, Exporter};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
