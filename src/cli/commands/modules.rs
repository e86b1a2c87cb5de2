//! `emt modules` command - List modules for an equipment code

use console::style;
use miette::Result;

use crate::cli::{table, GlobalOpts, OutputFormat};
use crate::core::columns;
use crate::core::resolver::{list_modules, type_for};
use crate::core::Config;

use super::DatasetArgs;

#[derive(clap::Args, Debug)]
pub struct ModulesArgs {
    /// Equipment code (canonical form, e.g. 43397068)
    pub code: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

pub fn run(args: ModulesArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = args.dataset.load(&config)?;
    dataset.require_columns(&[columns::EQUIPMENT_CODE, columns::MODULE])?;

    let modules = list_modules(&dataset, &args.code);
    let format = global.format(&config);

    if !global.quiet && format == OutputFormat::Tsv {
        let equipment_type = type_for(&dataset, &args.code);
        println!(
            "{} {} ({})",
            style("Equipment:").bold(),
            style(&args.code).cyan(),
            equipment_type.as_deref().unwrap_or("n/a")
        );
        println!();
    }

    print!("{}", table::render_list(&modules, format));

    if !global.quiet && format == OutputFormat::Tsv {
        println!();
        println!("{} module(s)", style(modules.len()).cyan());
    }
    Ok(())
}
