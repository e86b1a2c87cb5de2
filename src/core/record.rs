//! The tabular maintenance store
//!
//! A `MaintenanceTable` is a header-ordered, row-ordered table of optional
//! cell strings. It is built once per ingestion (load + normalize + join),
//! never mutated afterward by consumers, and replaced wholesale when a new
//! dataset is loaded. Row order is significant: forward-fill and the
//! resolver's tie-breaks depend on it.

use crate::core::error::MissingColumnError;

/// A single cell; `None` represents an empty/missing value.
pub type Cell = Option<String>;

/// An ordered collection of maintenance records with named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl MaintenanceTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a column by name: exact match first, then case-insensitive
    /// trimmed match to tolerate header drift across input files.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        if let Some(idx) = self.headers.iter().position(|h| h == name) {
            return Some(idx);
        }
        let wanted = name.trim().to_lowercase();
        self.headers
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
    }

    /// Get a cell by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Get a cell by row index and column index.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Overwrite a cell in place. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(c) = r.get_mut(col) {
                *c = value;
            }
        }
    }

    /// Append a column, filling existing rows with `None`.
    pub fn add_column(&mut self, name: impl Into<String>) -> usize {
        self.headers.push(name.into());
        for row in &mut self.rows {
            row.push(None);
        }
        self.headers.len() - 1
    }

    /// Project a subset of rows into a new table, preserving order.
    pub fn select_rows(&self, indices: &[usize]) -> MaintenanceTable {
        let mut out = MaintenanceTable::new(self.headers.clone());
        for &i in indices {
            if let Some(row) = self.rows.get(i) {
                out.rows.push(row.clone());
            }
        }
        out
    }

    /// Check that all named columns exist, collecting every missing name so
    /// the caller can report them in one message.
    pub fn require_columns(&self, names: &[&str]) -> Result<(), MissingColumnError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|n| self.column_index(n).is_none())
            .map(|n| n.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingColumnError { columns: missing })
        }
    }

    /// Write the table as RFC 4180 CSV: header row, one line per record,
    /// empty cells for missing values.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> csv::Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
