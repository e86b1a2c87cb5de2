//! Join engine
//!
//! Left-joins equipment metadata (code, type) into maintenance records on
//! the cleaned equipment code. Every maintenance row survives the join;
//! rows without a matching equipment row keep a null type. Key cleaning on
//! both sides means comma-grouped and plain-digit exports of the same code
//! still match.

use std::collections::HashMap;

use crate::core::columns;
use crate::core::error::MergeError;
use crate::core::normalize::{clean_equipment_code, forward_fill};
use crate::core::record::MaintenanceTable;

/// Merge equipment types into maintenance rows by equipment code.
///
/// The equipment table maps each code to its first-listed type (type is
/// functionally dependent on code; duplicates keep the first row). A `Type`
/// column is appended to the output when the maintenance table lacks one;
/// where it already exists, matched rows are overwritten with the metadata
/// value and unmatched rows keep what the maintenance sheet carried. After
/// joining, `Type` and `Module` are forward-filled to cover merged-cell
/// gaps in the source layout.
pub fn join(
    equipment: &MaintenanceTable,
    maintenance: &MaintenanceTable,
) -> Result<MaintenanceTable, MergeError> {
    let equip_key = equipment
        .column_index(columns::EQUIPMENT_CODE)
        .ok_or(MergeError {
            key: columns::EQUIPMENT_CODE.to_string(),
            side: "equipment",
        })?;
    let maint_key = maintenance
        .column_index(columns::EQUIPMENT_CODE)
        .ok_or(MergeError {
            key: columns::EQUIPMENT_CODE.to_string(),
            side: "maintenance",
        })?;

    let mut types: HashMap<String, Option<String>> = HashMap::new();
    let type_col = equipment.column_index(columns::EQUIPMENT_TYPE);
    for row in 0..equipment.len() {
        let Some(code) = equipment.cell(row, equip_key).and_then(clean_equipment_code) else {
            continue;
        };
        let ty = type_col
            .and_then(|c| equipment.cell(row, c))
            .map(String::from);
        types.entry(code).or_insert(ty);
    }

    let mut merged = maintenance.clone();
    let type_out = merged
        .column_index(columns::EQUIPMENT_TYPE)
        .unwrap_or_else(|| merged.add_column(columns::EQUIPMENT_TYPE));

    for row in 0..merged.len() {
        let Some(code) = merged.cell(row, maint_key).and_then(clean_equipment_code) else {
            continue;
        };
        if let Some(ty) = types.get(&code) {
            if ty.is_some() {
                merged.set(row, type_out, ty.clone());
            }
        }
    }

    forward_fill(&mut merged, columns::EQUIPMENT_TYPE);
    forward_fill(&mut merged, columns::MODULE);
    Ok(merged)
}
