//! `emt filter` command - Show or export the records for a selection

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::{table, GlobalOpts};
use crate::core::columns;
use crate::core::resolver::resolve;
use crate::core::Config;

use super::{export_csv, export_file_name, DatasetArgs};

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Equipment code (canonical form)
    pub code: String,

    /// Module name
    pub module: String,

    /// Components to include (all under the module when omitted)
    #[arg(long, short = 'c', value_delimiter = ',', value_name = "COMPONENT")]
    pub components: Vec<String>,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write the records as CSV to a file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the records as CSV to a timestamped file in the current directory
    #[arg(long, conflicts_with = "output")]
    pub export: bool,
}

pub fn run(args: FilterArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = args.dataset.load(&config)?;
    dataset.require_columns(&[columns::EQUIPMENT_CODE, columns::MODULE])?;

    let records = resolve(&dataset, &args.code, &args.module, &args.components);

    if records.is_empty() {
        eprintln!(
            "{} No records match {} / {}",
            style("!").yellow(),
            args.code,
            args.module
        );
        return Ok(());
    }

    let output = if args.export {
        Some(export_file_name(&args.code))
    } else {
        args.output.clone()
    };

    match output {
        Some(path) => {
            export_csv(&records, &path)?;
            println!(
                "{} {} record(s) written to {}",
                style("✓").green(),
                style(records.len()).cyan(),
                style(path.display()).yellow()
            );
        }
        None => {
            print!(
                "{}",
                table::render(&records, global.format(&config), !global.quiet)
            );
        }
    }
    Ok(())
}
