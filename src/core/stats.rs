//! Summary statistics over record subsets
//!
//! Durations arrive as `HH:MM:SS` text. Parsing fails soft: anything
//! malformed, negative, or with out-of-range minute/second components
//! counts as zero duration rather than aborting the batch. Manpower
//! averages ignore non-numeric cells and are zero (not NaN) when nothing
//! parses.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::columns;
use crate::core::record::MaintenanceTable;

/// Aggregate statistics for a record subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub record_count: usize,
    pub total_seconds: u64,
    pub average_manpower: f64,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            record_count: 0,
            total_seconds: 0,
            average_manpower: 0.0,
        }
    }
}

/// Parse `HH:MM:SS` into seconds. Returns 0 for anything that is not
/// exactly three non-negative integer parts with minutes and seconds
/// below 60. Hours are unbounded.
pub fn parse_hms(text: &str) -> u64 {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() != 3 {
        return 0;
    }
    let nums: Vec<u64> = parts
        .iter()
        .filter_map(|p| p.trim().parse::<u64>().ok())
        .collect();
    match nums.as_slice() {
        [h, m, s] if *m < 60 && *s < 60 => h * 3600 + m * 60 + s,
        _ => 0,
    }
}

/// Format seconds as zero-padded `HH:MM:SS`.
pub fn format_hms(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Summarize a record subset: count, summed total duration, and mean crew
/// size. The duration and manpower columns are located by the loose header
/// rules; when absent, their statistics stay zero.
pub fn summarize(table: &MaintenanceTable) -> Summary {
    if table.is_empty() {
        return Summary::empty();
    }

    let total_seconds = columns::TOTAL_TIME
        .find(table.headers())
        .map(|col| {
            (0..table.len())
                .filter_map(|row| table.cell(row, col))
                .map(parse_hms)
                .sum()
        })
        .unwrap_or(0);

    Summary {
        record_count: table.len(),
        total_seconds,
        average_manpower: average_manpower(table),
    }
}

fn average_manpower(table: &MaintenanceTable) -> f64 {
    let Some(col) = columns::MANPOWER.find(table.headers()) else {
        return 0.0;
    };
    let values: Vec<f64> = (0..table.len())
        .filter_map(|row| table.cell(row, col))
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Per-component time and crew totals, one entry per distinct component,
/// sorted by component name. Rows with a null component cell are skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentBreakdown {
    pub component: String,
    pub record_count: usize,
    pub prep_seconds: u64,
    pub activity_seconds: u64,
    pub total_seconds: u64,
    pub average_manpower: f64,
}

pub fn breakdown_by_component(table: &MaintenanceTable) -> Vec<ComponentBreakdown> {
    let Some(comp_col) = table.column_index(columns::COMPONENTS) else {
        return Vec::new();
    };
    let prep = columns::PREP_TIME.find(table.headers());
    let activity = columns::ACTIVITY_TIME.find(table.headers());
    let total = columns::TOTAL_TIME.find(table.headers());
    let manpower = columns::MANPOWER.find(table.headers());

    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for row in 0..table.len() {
        if let Some(comp) = table.cell(row, comp_col) {
            groups.entry(comp.to_string()).or_default().push(row);
        }
    }

    let sum_hms = |col: Option<usize>, rows: &[usize]| -> u64 {
        col.map(|c| {
            rows.iter()
                .filter_map(|&r| table.cell(r, c))
                .map(parse_hms)
                .sum()
        })
        .unwrap_or(0)
    };

    groups
        .into_iter()
        .map(|(component, rows)| {
            let crew: Vec<f64> = manpower
                .into_iter()
                .flat_map(|c| {
                    rows.iter()
                        .filter_map(move |&r| table.cell(r, c))
                        .filter_map(|v| v.trim().parse::<f64>().ok())
                })
                .collect();
            ComponentBreakdown {
                component,
                record_count: rows.len(),
                prep_seconds: sum_hms(prep, &rows),
                activity_seconds: sum_hms(activity, &rows),
                total_seconds: sum_hms(total, &rows),
                average_manpower: if crew.is_empty() {
                    0.0
                } else {
                    crew.iter().sum::<f64>() / crew.len() as f64
                },
            }
        })
        .collect()
}
