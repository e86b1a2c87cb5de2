//! Cascading filter resolver
//!
//! The drill-down is a strictly ordered 4-level cascade:
//! equipment code → type (derived, read-only) → module → components.
//! Every operation here is stateless per call; the caller owns the
//! in-flight selection as a [`SelectionPath`] and passes it back in on
//! each query. Candidate lists are distinct, lexicographically sorted on
//! the canonical string form, and scoped to the selections above them; a
//! level with zero candidates yields an empty list, never an error.

use std::collections::BTreeSet;

use crate::core::columns;
use crate::core::record::MaintenanceTable;

/// Distinct non-null equipment codes, sorted as strings.
pub fn list_equipment_codes(table: &MaintenanceTable) -> Vec<String> {
    distinct_values(table, columns::EQUIPMENT_CODE, |_| true)
}

/// The type for an equipment code: the first non-null type in row order
/// among matching rows. When a code anomalously maps to several distinct
/// types this silently picks the first encountered; that tie-break is
/// deliberate, not validated consistency.
pub fn type_for(table: &MaintenanceTable, equipment_code: &str) -> Option<String> {
    let code_col = table.column_index(columns::EQUIPMENT_CODE)?;
    let type_col = table.column_index(columns::EQUIPMENT_TYPE)?;
    (0..table.len())
        .filter(|&row| table.cell(row, code_col) == Some(equipment_code))
        .find_map(|row| table.cell(row, type_col).map(String::from))
}

/// Distinct modules among rows with the given equipment code, sorted.
pub fn list_modules(table: &MaintenanceTable, equipment_code: &str) -> Vec<String> {
    let Some(code_col) = table.column_index(columns::EQUIPMENT_CODE) else {
        return Vec::new();
    };
    distinct_values(table, columns::MODULE, |row| {
        table.cell(row, code_col) == Some(equipment_code)
    })
}

/// Distinct components among rows matching code and module, sorted.
pub fn list_components(
    table: &MaintenanceTable,
    equipment_code: &str,
    module: &str,
) -> Vec<String> {
    let (Some(code_col), Some(module_col)) = (
        table.column_index(columns::EQUIPMENT_CODE),
        table.column_index(columns::MODULE),
    ) else {
        return Vec::new();
    };
    distinct_values(table, columns::COMPONENTS, |row| {
        table.cell(row, code_col) == Some(equipment_code)
            && table.cell(row, module_col) == Some(module)
    })
}

/// The record subset for a full selection, preserving source row order.
/// An empty component set means "all components under this module".
pub fn resolve(
    table: &MaintenanceTable,
    equipment_code: &str,
    module: &str,
    components: &[String],
) -> MaintenanceTable {
    let (Some(code_col), Some(module_col)) = (
        table.column_index(columns::EQUIPMENT_CODE),
        table.column_index(columns::MODULE),
    ) else {
        return MaintenanceTable::new(table.headers().to_vec());
    };
    let comp_col = table.column_index(columns::COMPONENTS);

    let indices: Vec<usize> = (0..table.len())
        .filter(|&row| {
            table.cell(row, code_col) == Some(equipment_code)
                && table.cell(row, module_col) == Some(module)
                && (components.is_empty()
                    || comp_col
                        .and_then(|c| table.cell(row, c))
                        .is_some_and(|v| components.iter().any(|s| s == v)))
        })
        .collect();
    table.select_rows(&indices)
}

/// The UX default when components are first presented for a module: a
/// single-element selection holding the first available component. Applied
/// by the caller, not baked into [`resolve`].
pub fn default_components(
    table: &MaintenanceTable,
    equipment_code: &str,
    module: &str,
) -> Vec<String> {
    list_components(table, equipment_code, module)
        .into_iter()
        .take(1)
        .collect()
}

fn distinct_values<F>(table: &MaintenanceTable, column: &str, keep_row: F) -> Vec<String>
where
    F: Fn(usize) -> bool,
{
    let Some(col) = table.column_index(column) else {
        return Vec::new();
    };
    let set: BTreeSet<String> = (0..table.len())
        .filter(|&row| keep_row(row))
        .filter_map(|row| table.cell(row, col).map(String::from))
        .collect();
    set.into_iter().collect()
}

/// The caller-owned drill-down state. Selecting at one level invalidates
/// everything below it; the core never stores a path itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionPath {
    pub equipment_code: Option<String>,
    pub module: Option<String>,
    pub components: Vec<String>,
}

impl SelectionPath {
    /// Select an equipment code, clearing module and components.
    pub fn select_equipment(&mut self, code: impl Into<String>) {
        self.equipment_code = Some(code.into());
        self.module = None;
        self.components.clear();
    }

    /// Select a module, clearing components.
    pub fn select_module(&mut self, module: impl Into<String>) {
        self.module = Some(module.into());
        self.components.clear();
    }

    pub fn select_components(&mut self, components: Vec<String>) {
        self.components = components;
    }

    /// Resolve this path against a table. `None` until both the equipment
    /// code and module levels have been selected.
    pub fn resolve(&self, table: &MaintenanceTable) -> Option<MaintenanceTable> {
        let code = self.equipment_code.as_deref()?;
        let module = self.module.as_deref()?;
        Some(resolve(table, code, module, &self.components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> MaintenanceTable {
        let mut t = MaintenanceTable::new(vec![
            "Equipment Code".into(),
            "Type".into(),
            "Module".into(),
            "Components".into(),
        ]);
        let rows = [
            ("43397068", Some("KONE KCE"), "Door", "Sensor"),
            ("43397068", Some("KONE KCE"), "Door", "Belt"),
            ("43397068", Some("KONE KCE"), "Motor", "Brake"),
            ("9001", None, "Door", "Sensor"),
            ("9001", Some("KONE MX"), "Door", "Rollers"),
        ];
        for (code, ty, module, comp) in rows {
            t.push_row(vec![
                Some(code.into()),
                ty.map(String::from),
                Some(module.into()),
                Some(comp.into()),
            ]);
        }
        t
    }

    #[test]
    fn test_codes_are_distinct_and_string_sorted() {
        // Lexicographic, not numeric: "43397068" < "9001".
        assert_eq!(list_equipment_codes(&fixture()), vec!["43397068", "9001"]);
    }

    #[test]
    fn test_type_for_skips_null_and_takes_first() {
        let t = fixture();
        assert_eq!(type_for(&t, "43397068").as_deref(), Some("KONE KCE"));
        // Row 3 has a null type; the first non-null one wins.
        assert_eq!(type_for(&t, "9001").as_deref(), Some("KONE MX"));
        assert_eq!(type_for(&t, "77"), None);
    }

    #[test]
    fn test_type_tie_break_is_first_in_row_order() {
        let mut t = fixture();
        t.push_row(vec![
            Some("9001".into()),
            Some("CONFLICTING".into()),
            Some("Door".into()),
            Some("Sensor".into()),
        ]);
        assert_eq!(type_for(&t, "9001").as_deref(), Some("KONE MX"));
    }

    #[test]
    fn test_modules_are_scoped_to_code() {
        let t = fixture();
        assert_eq!(list_modules(&t, "43397068"), vec!["Door", "Motor"]);
        assert_eq!(list_modules(&t, "9001"), vec!["Door"]);
        assert!(list_modules(&t, "77").is_empty());
    }

    #[test]
    fn test_components_are_scoped_to_code_and_module() {
        let t = fixture();
        assert_eq!(
            list_components(&t, "43397068", "Door"),
            vec!["Belt", "Sensor"]
        );
        assert_eq!(list_components(&t, "9001", "Door"), vec!["Rollers", "Sensor"]);
        assert!(list_components(&t, "43397068", "Lift").is_empty());
    }

    #[test]
    fn test_missing_columns_yield_empty_lists() {
        let mut t = MaintenanceTable::new(vec!["Equipment Code".into()]);
        t.push_row(vec![Some("1".into())]);
        assert!(list_modules(&t, "1").is_empty());
        assert!(list_components(&t, "1", "Door").is_empty());
        assert_eq!(type_for(&t, "1"), None);
    }

    #[test]
    fn test_resolve_empty_components_returns_all_for_scope() {
        let t = fixture();
        let sub = resolve(&t, "43397068", "Door", &[]);
        assert_eq!(sub.len(), 2);
        // Source row order is preserved.
        assert_eq!(sub.get(0, "Components"), Some("Sensor"));
        assert_eq!(sub.get(1, "Components"), Some("Belt"));
    }

    #[test]
    fn test_resolve_filters_by_component_set() {
        let t = fixture();
        let sub = resolve(&t, "43397068", "Door", &["Belt".to_string()]);
        assert_eq!(sub.len(), 1);
        assert_eq!(sub.get(0, "Components"), Some("Belt"));

        let none = resolve(&t, "43397068", "Door", &["Brake".to_string()]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_default_components_is_first_available() {
        let t = fixture();
        assert_eq!(default_components(&t, "43397068", "Door"), vec!["Belt"]);
        assert!(default_components(&t, "77", "Door").is_empty());
    }

    #[test]
    fn test_selection_path_invalidation() {
        let mut path = SelectionPath::default();
        path.select_equipment("43397068");
        path.select_module("Door");
        path.select_components(vec!["Belt".to_string()]);

        path.select_module("Motor");
        assert!(path.components.is_empty());

        path.select_components(vec!["Brake".to_string()]);
        path.select_equipment("9001");
        assert_eq!(path.module, None);
        assert!(path.components.is_empty());
    }

    #[test]
    fn test_selection_path_resolve_needs_code_and_module() {
        let t = fixture();
        let mut path = SelectionPath::default();
        assert!(path.resolve(&t).is_none());
        path.select_equipment("43397068");
        assert!(path.resolve(&t).is_none());
        path.select_module("Motor");
        let sub = path.resolve(&t).unwrap();
        assert_eq!(sub.len(), 1);
    }
}
