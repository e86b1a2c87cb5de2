//! Command implementations

pub mod codes;
pub mod completions;
pub mod components;
pub mod drill;
pub mod filter;
pub mod merge;
pub mod modules;
pub mod stats;
pub mod summary;

use chrono::Local;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::ingest::load_dataset;
use crate::core::record::MaintenanceTable;
use crate::core::Config;

/// Dataset selection shared by every data command. Paths fall back to the
/// layered config (`emt.yaml`, global config, `EMT_*` environment).
#[derive(clap::Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Maintenance records CSV file
    #[arg(long, short = 'm', value_name = "FILE")]
    pub maintenance: Option<PathBuf>,

    /// Equipment metadata CSV file (Equipment Code + Type)
    #[arg(long, short = 'e', value_name = "FILE")]
    pub equipment: Option<PathBuf>,
}

impl DatasetArgs {
    /// Build the maintenance store for this invocation.
    pub fn load(&self, config: &Config) -> Result<MaintenanceTable> {
        let maintenance = self
            .maintenance
            .clone()
            .or_else(|| config.maintenance_file.clone())
            .ok_or_else(|| {
                miette::miette!(
                    "No maintenance file given. Use --maintenance, EMT_MAINTENANCE_FILE, or emt.yaml"
                )
            })?;
        let equipment = self.equipment.clone().or_else(|| config.equipment_file.clone());

        let table = load_dataset(&maintenance, equipment.as_deref())?;
        Ok(table)
    }
}

/// Write report content to a file, or stdout when no path is given.
pub(crate) fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Default export file name for a filtered subset:
/// `equipment_<code>_<YYYYmmdd_HHMMSS>.csv`.
pub(crate) fn export_file_name(equipment_code: &str) -> PathBuf {
    PathBuf::from(format!(
        "equipment_{}_{}.csv",
        equipment_code,
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Write a record subset as CSV to the given path.
pub(crate) fn export_csv(table: &MaintenanceTable, path: &Path) -> Result<()> {
    let file = File::create(path).into_diagnostic()?;
    table.write_csv(BufWriter::new(file)).into_diagnostic()?;
    Ok(())
}
