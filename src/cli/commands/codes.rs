//! `emt codes` command - List equipment codes with their types

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::columns;
use crate::core::resolver::{list_equipment_codes, type_for};
use crate::core::Config;

use super::DatasetArgs;

#[derive(clap::Args, Debug)]
pub struct CodesArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Show only the number of equipment codes
    #[arg(long)]
    pub count: bool,
}

#[derive(Serialize)]
struct CodeEntry {
    code: String,
    equipment_type: Option<String>,
}

pub fn run(args: CodesArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = args.dataset.load(&config)?;
    dataset.require_columns(&[columns::EQUIPMENT_CODE])?;

    let codes = list_equipment_codes(&dataset);

    if args.count {
        println!("{}", codes.len());
        return Ok(());
    }

    let entries: Vec<CodeEntry> = codes
        .into_iter()
        .map(|code| {
            let equipment_type = type_for(&dataset, &code);
            CodeEntry {
                code,
                equipment_type,
            }
        })
        .collect();

    match global.format(&config) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries).unwrap_or_default());
        }
        OutputFormat::Csv => {
            println!("code,type");
            for e in &entries {
                println!(
                    "{},{}",
                    escape_csv(&e.code),
                    escape_csv(e.equipment_type.as_deref().unwrap_or(""))
                );
            }
        }
        OutputFormat::Md => {
            println!("| Code | Type |");
            println!("|---|---|");
            for e in &entries {
                println!(
                    "| {} | {} |",
                    e.code,
                    e.equipment_type.as_deref().unwrap_or("-")
                );
            }
        }
        OutputFormat::Tsv => {
            let width = entries.iter().map(|e| e.code.len()).max().unwrap_or(4).max(4);
            println!(
                "{:<width$} {}",
                style("CODE").bold(),
                style("TYPE").bold(),
                width = width
            );
            for e in &entries {
                println!(
                    "{:<width$} {}",
                    style(&e.code).cyan(),
                    e.equipment_type.as_deref().unwrap_or("-"),
                    width = width
                );
            }
            if !global.quiet {
                println!();
                println!("{} equipment code(s)", style(entries.len()).cyan());
            }
        }
    }

    Ok(())
}
