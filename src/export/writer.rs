//! Destinations for mapped documents.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::document::mapper::MappedDocument;
use crate::error::{ExportError, Result};

/// Somewhere mapped documents go.
pub trait DocumentSink {
    /// Encode and store one document.
    fn write(&mut self, mapped: &MappedDocument) -> Result<()>;
}

/// Writes each document to its own file inside a directory.
///
/// Every document is written to a temporary file in the same directory and
/// renamed over its final name, so an existing file is either replaced whole
/// or left untouched.
#[derive(Debug)]
pub struct DirectoryWriter {
    directory: PathBuf,
}

impl DirectoryWriter {
    /// Open a writer, creating the directory if it does not exist.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        std::fs::create_dir_all(&directory)?;

        if !directory.is_dir() {
            return Err(ExportError::invalid_config(format!(
                "output path is not a directory: {}",
                directory.display()
            )));
        }

        Ok(DirectoryWriter { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path for a file name.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }
}

impl DocumentSink for DirectoryWriter {
    fn write(&mut self, mapped: &MappedDocument) -> Result<()> {
        let bytes = mapped.document.to_file_bytes()?;
        let path = self.file_path(&mapped.file_name);

        // Dropping the temp file on any early return removes it.
        let mut file = NamedTempFile::new_in(&self.directory)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| e.error)?;

        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Encodes documents and discards them.
#[derive(Debug, Default)]
pub struct DryRunSink {
    documents: usize,
    bytes: usize,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents encoded so far.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Total encoded size so far.
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl DocumentSink for DryRunSink {
    fn write(&mut self, mapped: &MappedDocument) -> Result<()> {
        self.bytes += mapped.document.to_file_bytes()?.len();
        self.documents += 1;
        Ok(())
    }
}
