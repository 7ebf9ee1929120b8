//! Document metadata and its string encoding.
//!
//! The upload schema carries metadata as a JSON object serialized into a
//! string field. The string uses `", "` between entries and `": "` between a
//! key and its value, e.g. `{"fakeNews": "Y"}`. Non-ASCII characters are
//! written as is.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::error::{ExportError, Result};

/// Metadata attached to every uploaded narrative document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeMetadata {
    #[serde(rename = "fakeNews")]
    pub fake_news: String,
}

impl NarrativeMetadata {
    pub fn new<S: Into<String>>(fake_news: S) -> Self {
        NarrativeMetadata {
            fake_news: fake_news.into(),
        }
    }

    /// Encode as the string stored in `metadataJson`.
    pub fn to_json_string(&self) -> Result<String> {
        to_spaced_string(self)
    }

    /// Parse a `metadataJson` string back into metadata.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Single-line JSON with a space after every `,` and `:` separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` with [`SpacedFormatter`].
pub fn to_spaced_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
