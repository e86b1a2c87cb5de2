//! `emt components` command - List components for a code and module

use console::style;
use miette::Result;

use crate::cli::{table, GlobalOpts, OutputFormat};
use crate::core::columns;
use crate::core::resolver::list_components;
use crate::core::Config;

use super::DatasetArgs;

#[derive(clap::Args, Debug)]
pub struct ComponentsArgs {
    /// Equipment code (canonical form)
    pub code: String,

    /// Module name
    pub module: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

pub fn run(args: ComponentsArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = args.dataset.load(&config)?;
    dataset.require_columns(&[
        columns::EQUIPMENT_CODE,
        columns::MODULE,
        columns::COMPONENTS,
    ])?;

    let components = list_components(&dataset, &args.code, &args.module);
    let format = global.format(&config);

    print!("{}", table::render_list(&components, format));

    if !global.quiet && format == OutputFormat::Tsv {
        println!();
        println!("{} component(s)", style(components.len()).cyan());
    }
    Ok(())
}
