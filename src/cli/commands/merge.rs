//! `emt merge` command - Build and preview the merged dataset

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::{table, GlobalOpts};
use crate::core::resolver::list_equipment_codes;
use crate::core::Config;

use super::{export_csv, DatasetArgs};

#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write the merged table as CSV to a file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of preview rows to show
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

pub fn run(args: MergeArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let merged = args.dataset.load(&config)?;

    if !global.quiet {
        println!(
            "{} Merged {} records ({} equipment codes)",
            style("✓").green(),
            style(merged.len()).cyan(),
            style(list_equipment_codes(&merged).len()).cyan()
        );
    }

    if !global.quiet && args.preview > 0 {
        let indices: Vec<usize> = (0..merged.len().min(args.preview)).collect();
        let head = merged.select_rows(&indices);
        println!();
        print!("{}", table::render(&head, global.format(&config), false));
        if merged.len() > args.preview {
            println!("... {} more row(s)", merged.len() - args.preview);
        }
    }

    if let Some(path) = &args.output {
        export_csv(&merged, path)?;
        println!(
            "{} Merged table written to {}",
            style("✓").green(),
            style(path.display()).yellow()
        );
    }

    Ok(())
}
