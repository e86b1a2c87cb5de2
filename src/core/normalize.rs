//! Record normalization
//!
//! Two concerns: canonicalizing equipment codes so the same machine keys
//! identically across differently-formatted exports, and forward-filling
//! the hierarchy columns to reconstruct values that merged spreadsheet
//! cells physically store only on the first row of a block.

use crate::core::columns;
use crate::core::record::MaintenanceTable;

/// Canonicalize an equipment code cell.
///
/// Thousands separators and surrounding whitespace are stripped. If what
/// remains parses as an integer (directly, or as an integer-valued decimal
/// like `43397068.0` from a spreadsheet float), the code becomes its plain
/// base-10 form, dropping leading zeros and decimal artifacts. Any other
/// non-empty string is kept verbatim; blank input yields `None` and the row
/// is excluded from code-keyed lookups downstream.
pub fn clean_equipment_code(raw: &str) -> Option<String> {
    let stripped = raw.trim().replace(',', "");
    if stripped.is_empty() {
        return None;
    }
    if let Ok(n) = stripped.parse::<i64>() {
        return Some(n.to_string());
    }
    if let Ok(f) = stripped.parse::<f64>() {
        if f.fract() == 0.0 && f.abs() < 9e15 {
            return Some((f as i64).to_string());
        }
    }
    Some(stripped)
}

/// Propagate the last non-null value downward through a column, in row
/// order. Leading nulls stay null. Idempotent.
pub fn forward_fill(table: &mut MaintenanceTable, column: &str) {
    let Some(col) = table.column_index(column) else {
        return;
    };
    let mut last: Option<String> = None;
    for row in 0..table.len() {
        match table.cell(row, col).map(String::from) {
            Some(v) => last = Some(v),
            None => {
                if last.is_some() {
                    table.set(row, col, last.clone());
                }
            }
        }
    }
}

/// Normalize a freshly ingested table in place: clean the equipment code
/// column, then forward-fill the hierarchy columns. Absent columns are
/// skipped; downstream features degrade to empty results instead.
pub fn normalize(table: &mut MaintenanceTable) {
    if let Some(col) = table.column_index(columns::EQUIPMENT_CODE) {
        for row in 0..table.len() {
            let cleaned = table.cell(row, col).and_then(clean_equipment_code);
            table.set(row, col, cleaned);
        }
    }
    forward_fill(table, columns::EQUIPMENT_CODE);
    forward_fill(table, columns::EQUIPMENT_TYPE);
    forward_fill(table, columns::MODULE);
}
