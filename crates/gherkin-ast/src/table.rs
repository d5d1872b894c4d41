//! Table rows and cells shared by data tables and examples tables.

use serde::Serialize;

use crate::Location;

/// A single cell of a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Position of the cell content.
    pub location: Location,
    /// Cell text with surrounding padding removed.
    pub value: String,
}

impl TableCell {
    /// Create a cell at `location` holding `value`.
    #[must_use]
    pub fn new(location: Location, value: impl Into<String>) -> Self {
        Self {
            location,
            value: value.into(),
        }
    }
}

/// One pipe-delimited row of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Position of the row's first character.
    pub location: Location,
    /// Cells in source order.
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from its location and cells.
    #[must_use]
    pub fn new(location: Location, cells: Vec<TableCell>) -> Self {
        Self { location, cells }
    }

    /// Iterate over the cell values of this row.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.value.as_str())
    }
}

/// A data table attached to a step.
///
/// Every row holds the same number of cells; the builder rejects tables that
/// do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTable {
    /// Rows in source order.
    pub rows: Vec<TableRow>,
}

impl DataTable {
    /// Wrap a list of rows.
    #[must_use]
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    /// Location of the first row, if the table has any rows.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.rows.first().map(|row| row.location)
    }

    /// Number of cells per row, or zero for an empty table.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }
}
