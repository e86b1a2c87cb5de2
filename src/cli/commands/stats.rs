//! `emt stats` command - Summary statistics for a selection

use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::columns;
use crate::core::resolver::resolve;
use crate::core::stats::{breakdown_by_component, format_hms, summarize};
use crate::core::Config;

use super::DatasetArgs;

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Equipment code (canonical form)
    pub code: String,

    /// Module name
    pub module: String,

    /// Components to include (all under the module when omitted)
    #[arg(long, short = 'c', value_delimiter = ',', value_name = "COMPONENT")]
    pub components: Vec<String>,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Add a per-component time and crew breakdown
    #[arg(long)]
    pub per_component: bool,
}

pub fn run(args: StatsArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = args.dataset.load(&config)?;
    dataset.require_columns(&[columns::EQUIPMENT_CODE, columns::MODULE])?;

    let records = resolve(&dataset, &args.code, &args.module, &args.components);
    let summary = summarize(&records);

    if global.format(&config) == OutputFormat::Json {
        let mut value = serde_json::json!({
            "record_count": summary.record_count,
            "total_seconds": summary.total_seconds,
            "total_time": format_hms(summary.total_seconds),
            "average_manpower": summary.average_manpower,
        });
        if args.per_component {
            value["components"] =
                serde_json::to_value(breakdown_by_component(&records)).unwrap_or_default();
        }
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return Ok(());
    }

    let total_time = if summary.total_seconds > 0 {
        format_hms(summary.total_seconds)
    } else {
        "N/A".to_string()
    };

    println!(
        "{} {} / {}{}",
        style("Selection:").bold(),
        style(&args.code).cyan(),
        args.module,
        if args.components.is_empty() {
            String::new()
        } else {
            format!(" / {}", args.components.join(", "))
        }
    );
    println!();
    println!("  Records:      {}", style(summary.record_count).cyan());
    println!("  Total time:   {}", style(&total_time).cyan());
    println!(
        "  Avg manpower: {}",
        style(format!("{:.1}", summary.average_manpower)).cyan()
    );

    if args.per_component {
        let breakdown = breakdown_by_component(&records);
        if !breakdown.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Component", "Records", "Prep", "Activity", "Total", "Avg crew"]);
            for entry in &breakdown {
                builder.push_record([
                    entry.component.clone(),
                    entry.record_count.to_string(),
                    format_hms(entry.prep_seconds),
                    format_hms(entry.activity_seconds),
                    format_hms(entry.total_seconds),
                    format!("{:.1}", entry.average_manpower),
                ]);
            }
            println!();
            println!("{}", builder.build().with(Style::markdown()));
        }
    }

    Ok(())
}
