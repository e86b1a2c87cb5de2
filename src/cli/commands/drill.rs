//! `emt drill` command - Interactive cascading drill-down
//!
//! Walks the operator through the 4-level cascade: pick an equipment code
//! (its type is shown, not chosen), pick a module, pick components. Each
//! pick invalidates the levels below it; the component prompt starts with
//! the first available component pre-selected. Ends with the matching
//! records, their statistics, and an optional CSV export.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::{table, GlobalOpts, OutputFormat};
use crate::core::columns;
use crate::core::resolver::{
    list_components, list_equipment_codes, list_modules, resolve, type_for, SelectionPath,
};
use crate::core::stats::{format_hms, summarize};
use crate::core::Config;

use super::{export_csv, export_file_name, DatasetArgs};

#[derive(clap::Args, Debug)]
pub struct DrillArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

pub fn run(args: DrillArgs, _global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = args.dataset.load(&config)?;
    dataset.require_columns(&[
        columns::EQUIPMENT_CODE,
        columns::MODULE,
        columns::COMPONENTS,
    ])?;

    let theme = ColorfulTheme::default();
    let mut path = SelectionPath::default();

    let codes = list_equipment_codes(&dataset);
    if codes.is_empty() {
        println!("{} No equipment codes in this dataset", style("!").yellow());
        return Ok(());
    }

    let labels: Vec<String> = codes
        .iter()
        .map(|code| {
            let ty = type_for(&dataset, code);
            format!("{} ({})", code, ty.as_deref().unwrap_or("n/a"))
        })
        .collect();
    let pick = Select::with_theme(&theme)
        .with_prompt("Equipment code")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let code = codes[pick].clone();
    path.select_equipment(code.clone());

    println!(
        "{} {}",
        style("Type:").bold(),
        type_for(&dataset, &code).as_deref().unwrap_or("n/a")
    );

    let modules = list_modules(&dataset, &code);
    if modules.is_empty() {
        println!("{} No modules for {}", style("!").yellow(), code);
        return Ok(());
    }
    let pick = Select::with_theme(&theme)
        .with_prompt("Module")
        .items(&modules)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let module = modules[pick].clone();
    path.select_module(module.clone());

    let components = list_components(&dataset, &code, &module);
    if components.is_empty() {
        println!(
            "{} No components under {} / {}; showing all records",
            style("!").yellow(),
            code,
            module
        );
    } else {
        // First component pre-selected, matching the dashboard default.
        let mut defaults = vec![false; components.len()];
        defaults[0] = true;
        let picks = MultiSelect::with_theme(&theme)
            .with_prompt("Components")
            .items(&components)
            .defaults(&defaults)
            .interact()
            .into_diagnostic()?;
        path.select_components(picks.into_iter().map(|i| components[i].clone()).collect());
        if path.components.is_empty() {
            println!(
                "{} No components selected; showing all under {}",
                style("!").yellow(),
                module
            );
        }
    }

    let records = resolve(&dataset, &code, &module, &path.components);
    if records.is_empty() {
        println!("{} No records match this selection", style("!").yellow());
        return Ok(());
    }

    println!();
    print!("{}", table::render(&records, OutputFormat::Tsv, false));
    println!();

    let summary = summarize(&records);
    println!(
        "{} {} record(s), total time {}, avg manpower {:.1}",
        style("✓").green(),
        style(summary.record_count).cyan(),
        style(format_hms(summary.total_seconds)).cyan(),
        summary.average_manpower
    );

    let export = Confirm::with_theme(&theme)
        .with_prompt("Export these records to CSV?")
        .default(false)
        .interact()
        .into_diagnostic()?;
    if export {
        let file = export_file_name(&code);
        export_csv(&records, &file)?;
        println!(
            "{} Written to {}",
            style("✓").green(),
            style(file.display()).yellow()
        );
    }

    Ok(())
}
