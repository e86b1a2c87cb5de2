//! Table formatting for record listings
//!
//! Record tables carry whatever columns the source files had, so widths
//! are computed from content instead of a fixed column list. TSV output is
//! for terminals (styled header, dashed separator, summary line), CSV and
//! Markdown are for piping, JSON is for machines.

use console::style;

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::OutputFormat;
use crate::core::record::MaintenanceTable;

/// Maximum width of any rendered column before truncation.
const MAX_COL_WIDTH: usize = 40;

/// Render a record table in the given format.
pub fn render(table: &MaintenanceTable, format: OutputFormat, show_summary: bool) -> String {
    match format {
        OutputFormat::Tsv => render_tsv(table, show_summary),
        OutputFormat::Csv => render_csv(table),
        OutputFormat::Md => render_md(table),
        OutputFormat::Json => render_json(table),
    }
}

fn column_widths(table: &MaintenanceTable) -> Vec<usize> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let content = (0..table.len())
                .filter_map(|row| table.cell(row, col))
                .map(|c| c.len())
                .max()
                .unwrap_or(0);
            header.len().max(content).max(1).min(MAX_COL_WIDTH)
        })
        .collect()
}

fn render_tsv(table: &MaintenanceTable, show_summary: bool) -> String {
    let widths = column_widths(table);
    let mut out = String::new();

    let header_parts: Vec<String> = table
        .headers()
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", style(h).bold(), width = w))
        .collect();
    out.push_str(&header_parts.join(" "));
    out.push('\n');

    let total_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in 0..table.len() {
        let parts: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, &w)| {
                let cell = table.cell(row, col).unwrap_or("-");
                format!("{:<width$}", truncate_str(cell, w), width = w)
            })
            .collect();
        out.push_str(parts.join(" ").trim_end());
        out.push('\n');
    }

    if show_summary {
        out.push('\n');
        out.push_str(&format!("{} record(s)\n", style(table.len()).cyan()));
    }
    out
}

fn render_csv(table: &MaintenanceTable) -> String {
    table.to_csv_string().unwrap_or_default()
}

fn render_md(table: &MaintenanceTable) -> String {
    let mut out = String::new();
    let escape = |s: &str| s.replace('|', "\\|");

    let headers: Vec<String> = table.headers().iter().map(|h| escape(h)).collect();
    out.push_str(&format!("| {} |\n", headers.join(" | ")));
    let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
    out.push_str(&format!("|{}|\n", separators.join("|")));

    for row in 0..table.len() {
        let cells: Vec<String> = (0..table.headers().len())
            .map(|col| escape(table.cell(row, col).unwrap_or("-")))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

fn render_json(table: &MaintenanceTable) -> String {
    let rows: Vec<Vec<Option<&str>>> = (0..table.len())
        .map(|row| {
            (0..table.headers().len())
                .map(|col| table.cell(row, col))
                .collect()
        })
        .collect();
    let value = serde_json::json!({
        "headers": table.headers(),
        "rows": rows,
    });
    let mut text = serde_json::to_string_pretty(&value).unwrap_or_default();
    text.push('\n');
    text
}

/// Render a plain list of values (codes, modules, components).
pub fn render_list(values: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(values).unwrap_or_default();
            text.push('\n');
            text
        }
        OutputFormat::Csv => {
            let mut out = String::new();
            for v in values {
                out.push_str(&escape_csv(v));
                out.push('\n');
            }
            out
        }
        _ => {
            let mut out = String::new();
            for v in values {
                out.push_str(v);
                out.push('\n');
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MaintenanceTable {
        let mut t = MaintenanceTable::new(vec!["Equipment Code".into(), "Module".into()]);
        t.push_row(vec![Some("43397068".into()), Some("Door".into())]);
        t.push_row(vec![Some("9001".into()), None]);
        t
    }

    #[test]
    fn test_tsv_contains_cells_and_summary() {
        let out = render(&table(), OutputFormat::Tsv, true);
        assert!(out.contains("43397068"));
        assert!(out.contains("Door"));
        assert!(out.contains("record(s)"));
    }

    #[test]
    fn test_csv_has_header_and_empty_cells() {
        let out = render(&table(), OutputFormat::Csv, true);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Equipment Code,Module"));
        assert_eq!(lines.next(), Some("43397068,Door"));
        assert_eq!(lines.next(), Some("9001,"));
    }

    #[test]
    fn test_md_escapes_pipes() {
        let mut t = MaintenanceTable::new(vec!["a".into()]);
        t.push_row(vec![Some("x|y".into())]);
        let out = render(&t, OutputFormat::Md, true);
        assert!(out.contains("x\\|y"));
    }

    #[test]
    fn test_json_preserves_column_order_and_nulls() {
        let out = render(&table(), OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["headers"][0], "Equipment Code");
        assert_eq!(value["rows"][1][1], serde_json::Value::Null);
    }

    #[test]
    fn test_render_list_plain_and_json() {
        let values = vec!["Door".to_string(), "Motor".to_string()];
        assert_eq!(render_list(&values, OutputFormat::Tsv), "Door\nMotor\n");
        let json = render_list(&values, OutputFormat::Json);
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);
    }
}
