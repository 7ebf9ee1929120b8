//! CSV table reader.
//!
//! The first row holds the column names:
//! ```csv
//! id,Narrative,Fakes,Debunking
//! 82,X,Y,<p>Z</p>
//! ```
//!
//! Cells are kept as text exactly as read. Rows shorter than the header are
//! accepted here; their absent cells come out as `None` and are rejected later
//! by record validation with the row number attached.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use log::debug;

use crate::document::converter::RowConverter;
use crate::document::record::{RawRow, REQUIRED_COLUMNS};
use crate::error::{ExportError, Result, RowRef};

/// A row reader for delimited text tables.
#[derive(Debug, Clone)]
pub struct CsvRowConverter {
    /// Delimiter byte (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from cells
    trim: bool,
}

impl Default for CsvRowConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRowConverter {
    /// Create a new CSV reader with comma delimiter and the narrative columns required.
    pub fn new() -> Self {
        CsvRowConverter {
            delimiter: b',',
            trim: false,
        }
    }

    /// Set a custom delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace from cells.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read rows from any reader.
    pub fn read<R: Read>(&self, reader: R) -> Result<CsvRowIterator<R>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(ExportError::MissingColumn(REQUIRED_COLUMNS[0].to_string()));
        }

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ExportError::MissingColumn(column.to_string()));
            }
        }

        debug!("CSV header: {:?}", headers.iter().collect::<Vec<_>>());

        Ok(CsvRowIterator {
            headers,
            records: reader.into_records(),
            row: 0,
        })
    }

    /// Read rows from an in-memory table.
    pub fn read_str<'a>(&self, input: &'a str) -> Result<CsvRowIterator<&'a [u8]>> {
        self.read(input.as_bytes())
    }
}

/// Iterator over the data rows of a CSV table.
pub struct CsvRowIterator<R> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
    row: usize,
}

impl<R: Read> Iterator for CsvRowIterator<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.row += 1;

        let record = match record {
            Ok(record) => record,
            Err(source) => {
                return Some(Err(ExportError::MalformedRow {
                    at: RowRef::new(self.row, None),
                    source,
                }));
            }
        };

        let mut raw = RawRow::new(self.row);
        for (i, header) in self.headers.iter().enumerate() {
            raw.insert(header, record.get(i).map(str::to_string));
        }
        Some(Ok(raw))
    }
}

impl RowConverter for CsvRowConverter {
    type Iter = CsvRowIterator<File>;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExportError::InputNotFound(path.to_path_buf()),
            _ => ExportError::Io(e),
        })?;
        self.read(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,Narrative,Fakes,Debunking";

    #[test]
    fn test_csv_basic_rows() {
        let input = format!("{HEADER}\n82,X,Y,<p>Z</p>\n83,A,,B\n");
        let rows: Vec<_> = CsvRowConverter::new()
            .read_str(&input)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row(), 1);
        assert_eq!(rows[0].get("id"), Some("82"));
        assert_eq!(rows[0].get("Debunking"), Some("<p>Z</p>"));
        assert_eq!(rows[1].row(), 2);
        assert_eq!(rows[1].get("Fakes"), Some(""));
    }

    #[test]
    fn test_csv_quoted_fields() {
        let input = format!(
            "{HEADER}\n1,\"Rust, Programming\",\"He said \"\"no\"\"\",\"<p>line one</p>\n<p>line two</p>\"\n"
        );
        let mut rows = CsvRowConverter::new().read_str(&input).unwrap();
        let row = rows.next().unwrap().unwrap();

        assert_eq!(row.get("Narrative"), Some("Rust, Programming"));
        assert_eq!(row.get("Fakes"), Some(r#"He said "no""#));
        assert_eq!(
            row.get("Debunking"),
            Some("<p>line one</p>\n<p>line two</p>")
        );
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_csv_short_row_has_absent_cells() {
        let input = format!("{HEADER}\n5,X,Y\n");
        let row = CsvRowConverter::new()
            .read_str(&input)
            .unwrap()
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(row.get("Fakes"), Some("Y"));
        assert_eq!(row.get("Debunking"), None);
    }

    #[test]
    fn test_csv_extra_columns_kept() {
        let input = "Debunking,Fakes,Narrative,id,source\nZ,Y,X,1,web\n";
        let row = CsvRowConverter::new()
            .read_str(input)
            .unwrap()
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(row.get("id"), Some("1"));
        assert_eq!(row.get("source"), Some("web"));
    }

    #[test]
    fn test_csv_missing_column() {
        let result = CsvRowConverter::new().read_str("id,Narrative,Fakes\n1,X,Y\n");
        match result {
            Err(ExportError::MissingColumn(column)) => assert_eq!(column, "Debunking"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected missing column error"),
        }
    }

    #[test]
    fn test_csv_empty_input() {
        assert!(CsvRowConverter::new().read_str("").is_err());
    }

    #[test]
    fn test_csv_header_only() {
        let mut rows = CsvRowConverter::new().read_str(HEADER).unwrap();
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_csv_no_trim_by_default() {
        let input = format!("{HEADER}\n1, X ,Y,Z\n");
        let row = CsvRowConverter::new()
            .read_str(&input)
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(row.get("Narrative"), Some(" X "));

        let row = CsvRowConverter::new()
            .with_trim(true)
            .read_str(&input)
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(row.get("Narrative"), Some("X"));
    }

    #[test]
    fn test_csv_custom_delimiter() {
        let input = "id\tNarrative\tFakes\tDebunking\n1\tX, with comma\tY\tZ\n";
        let row = CsvRowConverter::new()
            .with_delimiter(b'\t')
            .read_str(input)
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(row.get("Narrative"), Some("X, with comma"));
    }

    #[test]
    fn test_csv_malformed_row_keeps_numbering() {
        let mut input = format!("{HEADER}\n1,X,Y,Z\n").into_bytes();
        input.extend_from_slice(b"2,\xff\xfe,Y,Z\n3,X,Y,Z\n");

        let rows: Vec<_> = CsvRowConverter::new().read(input.as_slice()).unwrap().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_ref().unwrap().row(), 1);
        match &rows[1] {
            Err(ExportError::MalformedRow { at, .. }) => assert_eq!(at.row, 2),
            other => panic!("expected malformed row, got {other:?}"),
        }
        assert_eq!(rows[2].as_ref().unwrap().row(), 3);
    }

    #[test]
    fn test_csv_file_not_found() {
        let result = CsvRowConverter::new().convert("/nonexistent/narratives.csv");
        assert!(matches!(result, Err(ExportError::InputNotFound(_))));
    }

    #[test]
    fn test_csv_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "10,Україна,Фейк,<p>Спростування</p>").unwrap();
        file.flush().unwrap();

        let rows: Vec<_> = CsvRowConverter::new()
            .convert(file.path())
            .unwrap()
            .collect();
        assert_eq!(rows.len(), 1);
        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.get("Narrative"), Some("Україна"));
    }
}
