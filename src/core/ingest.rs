//! Dataset ingestion
//!
//! Reads CSV exports into raw tables and assembles the maintenance store:
//! read, normalize, and (when equipment metadata is supplied) join. The
//! resulting table is immutable; loading again builds a fresh one.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::error::{EmptyInputError, IngestError};
use crate::core::join::join;
use crate::core::normalize::normalize;
use crate::core::record::MaintenanceTable;

/// Read a CSV file into a raw table. Cells are trimmed; empty cells become
/// nulls. A file with a header but no data rows is an [`EmptyInputError`].
pub fn read_csv_table(path: &Path) -> Result<MaintenanceTable, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(String::from)
        .collect();

    let mut table = MaintenanceTable::new(headers);
    for result in rdr.records() {
        let record = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        table.push_row(
            record
                .iter()
                .map(|cell| {
                    let cell = cell.trim();
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect(),
        );
    }

    if table.is_empty() {
        return Err(EmptyInputError {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(table)
}

/// Build the maintenance store for one dataset.
///
/// The maintenance file is read and normalized (code cleaning +
/// forward-fill). When an equipment file is given its types are joined in;
/// otherwise the maintenance file's own `Type` column, if any, serves
/// (the single-file variant).
pub fn load_dataset(
    maintenance: &Path,
    equipment: Option<&Path>,
) -> Result<MaintenanceTable, IngestError> {
    let mut table = read_csv_table(maintenance)?;
    normalize(&mut table);

    if let Some(equipment_path) = equipment {
        let metadata = read_csv_table(equipment_path)?;
        table = join(&metadata, &table)?;
    }
    Ok(table)
}
