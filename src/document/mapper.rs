//! Row-to-document mapping.
//!
//! [`DocumentMapper`] turns one [`NarrativeRecord`] into one
//! [`UploadDocument`] and names the file it belongs in. The mapping is pure:
//! the same record always produces the same document.

use crate::document::markup::strip_paragraphs;
use crate::document::metadata::NarrativeMetadata;
use crate::document::record::{NarrativeRecord, RawRow};
use crate::document::upload::{Section, UploadDocument};
use crate::error::Result;

/// Prefix of every document title.
pub const TITLE_PREFIX: &str = "Misinformation narrative: ";
/// Prefix of every output file name.
pub const FILE_PREFIX: &str = "narrative_";
/// Extension of every output file name.
pub const FILE_EXTENSION: &str = "json";

/// A mapped document together with the name of its output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedDocument {
    pub file_name: String,
    pub document: UploadDocument,
}

/// Maps narrative records to upload documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentMapper;

impl DocumentMapper {
    pub fn new() -> Self {
        DocumentMapper
    }

    /// Validate a raw row and map it.
    pub fn map_row(&self, raw: &RawRow) -> Result<MappedDocument> {
        let record = NarrativeRecord::try_from_row(raw)?;
        self.map_record(&record)
    }

    /// Map a validated record.
    pub fn map_record(&self, record: &NarrativeRecord) -> Result<MappedDocument> {
        let metadata = NarrativeMetadata::new(record.fakes.as_str());

        let document = UploadDocument {
            document_id: record.id.clone(),
            title: format!("{TITLE_PREFIX}{}", record.narrative),
            metadata_json: metadata.to_json_string()?,
            section: vec![Section {
                text: strip_paragraphs(&record.debunking),
            }],
        };

        Ok(MappedDocument {
            file_name: file_name(&record.id),
            document,
        })
    }
}

/// Output file name for a document id: `narrative_<id>.json`.
pub fn file_name(id: &str) -> String {
    format!("{FILE_PREFIX}{id}.{FILE_EXTENSION}")
}
