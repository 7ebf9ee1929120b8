//! Table readers producing raw rows.
//!
//! This module provides the [`RowConverter`] trait and the CSV implementation
//! used by the exporter. A converter opens a table file and yields one
//! [`RawRow`] per data row, in table order, keyed by the original column names.

use std::path::Path;

use crate::document::record::RawRow;
use crate::error::Result;

pub mod csv;

/// A trait for converting table files into raw row iterators.
///
/// # Example
///
/// ```no_run
/// use narrative_export::document::converter::RowConverter;
/// use narrative_export::document::converter::csv::CsvRowConverter;
///
/// let converter = CsvRowConverter::new();
/// for row in converter.convert("narratives.csv").unwrap() {
///     let row = row.unwrap();
///     println!("row {}: {:?}", row.row(), row.get("id"));
/// }
/// ```
pub trait RowConverter {
    /// The iterator type that yields rows.
    type Iter: Iterator<Item = Result<RawRow>>;

    /// Open a file and return an iterator over its rows.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}
