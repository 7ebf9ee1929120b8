//! Upload documents.
//!
//! An [`UploadDocument`] is the JSON object the document-indexing service
//! accepts for one document. Fields serialize in declaration order:
//! `documentId`, `title`, `metadataJson`, `section`.

use serde::{Deserialize, Serialize};

use crate::document::metadata::NarrativeMetadata;
use crate::error::Result;

/// One text section of an upload document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub text: String,
}

/// A document in the upload schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocument {
    pub document_id: String,
    pub title: String,
    /// Metadata object encoded as a JSON string.
    pub metadata_json: String,
    pub section: Vec<Section>,
}

impl UploadDocument {
    /// Decode `metadata_json`.
    pub fn metadata(&self) -> Result<NarrativeMetadata> {
        NarrativeMetadata::from_json_str(&self.metadata_json)
    }

    /// Encode as the bytes written to the document's file.
    ///
    /// Two-space indentation, non-ASCII characters unescaped, no trailing newline.
    pub fn to_file_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Decode a file written by [`UploadDocument::to_file_bytes`].
    pub fn from_file_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
