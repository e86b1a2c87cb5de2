//! `emt summary` command - Per-equipment report over the whole dataset

use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::GlobalOpts;
use crate::core::columns;
use crate::core::resolver::{list_equipment_codes, type_for};
use crate::core::stats::{format_hms, summarize};
use crate::core::Config;

use super::{write_output, DatasetArgs};

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Output to file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: SummaryArgs, _global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = args.dataset.load(&config)?;
    dataset.require_columns(&[columns::EQUIPMENT_CODE])?;

    let codes = list_equipment_codes(&dataset);
    let totals = summarize(&dataset);

    let mut output = String::new();
    output.push_str("# Equipment Summary\n\n");
    output.push_str(&format!("Equipment codes: {}\n", codes.len()));
    output.push_str(&format!("Total records:   {}\n", totals.record_count));
    output.push_str(&format!(
        "Total time:      {}\n",
        format_hms(totals.total_seconds)
    ));
    output.push_str(&format!(
        "Average manpower: {:.1}\n\n",
        totals.average_manpower
    ));

    let code_col = dataset.column_index(columns::EQUIPMENT_CODE);
    let mut builder = Builder::default();
    builder.push_record(["Code", "Type", "Records"]);
    for code in &codes {
        let records = code_col
            .map(|col| {
                (0..dataset.len())
                    .filter(|&row| dataset.cell(row, col) == Some(code.as_str()))
                    .count()
            })
            .unwrap_or(0);
        builder.push_record([
            code.clone(),
            type_for(&dataset, code).unwrap_or_else(|| "-".to_string()),
            records.to_string(),
        ]);
    }
    output.push_str(&builder.build().with(Style::markdown()).to_string());
    output.push('\n');

    write_output(&output, args.output)
}
