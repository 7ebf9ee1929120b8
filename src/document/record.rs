//! Typed input records.
//!
//! A [`RawRow`] is what the table reader produces: the row's cells keyed by
//! their original column names, with `None` for cells the row does not have.
//! [`NarrativeRecord::try_from_row`] validates a raw row into the typed record
//! the mapper consumes.

use std::collections::BTreeMap;

use crate::error::{ExportError, Result, RowRef};

/// Column holding the document identifier.
pub const ID_COLUMN: &str = "id";
/// Column holding the narrative label.
pub const NARRATIVE_COLUMN: &str = "Narrative";
/// Column holding the description of the false claims.
pub const FAKES_COLUMN: &str = "Fakes";
/// Column holding the debunking text.
pub const DEBUNKING_COLUMN: &str = "Debunking";

/// Columns every input table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [ID_COLUMN, NARRATIVE_COLUMN, FAKES_COLUMN, DEBUNKING_COLUMN];

/// One table row as read, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based data row number.
    row: usize,
    cells: BTreeMap<String, Option<String>>,
}

impl RawRow {
    pub fn new(row: usize) -> Self {
        RawRow {
            row,
            cells: BTreeMap::new(),
        }
    }

    /// Set a cell. `None` marks a cell the row does not have.
    pub fn insert<S: Into<String>>(&mut self, column: S, value: Option<String>) {
        self.cells.insert(column.into(), value);
    }

    /// Builder-style variant of [`RawRow::insert`] for present cells.
    pub fn with<S: Into<String>, V: Into<String>>(mut self, column: S, value: V) -> Self {
        self.insert(column, Some(value.into()));
        self
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Get a cell's text, if the column exists and the row has the cell.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(|v| v.as_deref())
    }

    /// Reference to this row for error reporting.
    pub fn row_ref(&self) -> RowRef {
        let id = self
            .get(ID_COLUMN)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        RowRef::new(self.row, id)
    }
}

/// A validated narrative row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRecord {
    pub row: usize,
    pub id: String,
    pub narrative: String,
    pub fakes: String,
    pub debunking: String,
}

impl NarrativeRecord {
    /// Validate a raw row.
    ///
    /// `id`, `Narrative` and `Debunking` must be present and non-empty.
    /// `Fakes` must be present but may be empty. The `id` must also be usable
    /// as part of a file name.
    pub fn try_from_row(raw: &RawRow) -> Result<Self> {
        let id = required(raw, ID_COLUMN, false)?;
        check_id(raw, &id)?;

        Ok(NarrativeRecord {
            row: raw.row(),
            narrative: required(raw, NARRATIVE_COLUMN, false)?,
            fakes: required(raw, FAKES_COLUMN, true)?,
            debunking: required(raw, DEBUNKING_COLUMN, false)?,
            id,
        })
    }

    pub fn row_ref(&self) -> RowRef {
        RowRef::new(self.row, Some(self.id.clone()))
    }
}

impl TryFrom<&RawRow> for NarrativeRecord {
    type Error = ExportError;

    fn try_from(raw: &RawRow) -> Result<Self> {
        NarrativeRecord::try_from_row(raw)
    }
}

fn required(raw: &RawRow, column: &str, allow_empty: bool) -> Result<String> {
    match raw.get(column) {
        Some(value) if allow_empty || !value.is_empty() => Ok(value.to_string()),
        _ => Err(ExportError::missing_field(raw.row_ref(), column)),
    }
}

fn check_id(raw: &RawRow, id: &str) -> Result<()> {
    if id == "." || id == ".." {
        return Err(ExportError::invalid_field(
            raw.row_ref(),
            ID_COLUMN,
            "id cannot be a relative path component",
        ));
    }
    if id.chars().any(|c| c == '/' || c == '\\' || c == '\0') {
        return Err(ExportError::invalid_field(
            raw.row_ref(),
            ID_COLUMN,
            "id cannot contain path separators",
        ));
    }
    Ok(())
}
