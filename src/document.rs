//! Narrative records and the upload documents built from them.
//!
//! # Core Components
//!
//! - [`record::NarrativeRecord`] - A validated input row
//! - [`mapper::DocumentMapper`] - Maps a record to an upload document
//! - [`upload::UploadDocument`] - The document in the upload schema
//! - [`converter`] - Table readers producing raw rows
//!
//! # Examples
//!
//! ```
//! use narrative_export::document::mapper::DocumentMapper;
//! use narrative_export::document::record::RawRow;
//!
//! let row = RawRow::new(1)
//!     .with("id", "82")
//!     .with("Narrative", "X")
//!     .with("Fakes", "Y")
//!     .with("Debunking", "<p>Z</p>");
//!
//! let mapped = DocumentMapper::new().map_row(&row).unwrap();
//! assert_eq!(mapped.file_name, "narrative_82.json");
//! assert_eq!(mapped.document.metadata_json, r#"{"fakeNews": "Y"}"#);
//! assert_eq!(mapped.document.section[0].text, "Z");
//! ```

pub mod converter;
pub mod mapper;
pub mod markup;
pub mod metadata;
pub mod record;
pub mod upload;
