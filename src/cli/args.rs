//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    codes::CodesArgs, completions::CompletionsArgs, components::ComponentsArgs, drill::DrillArgs,
    filter::FilterArgs, merge::MergeArgs, modules::ModulesArgs, stats::StatsArgs,
    summary::SummaryArgs,
};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "emt")]
#[command(author, version, about = "Equipment Maintenance Toolkit")]
#[command(
    long_about = "A command-line toolkit for exploring equipment maintenance records: merge equipment and maintenance CSV exports, drill down through equipment, module, and component filters, and produce statistics and CSV exports."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format (defaults to config, then tsv)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Resolve the effective output format: flag, then config, then tsv.
    pub fn format(&self, config: &Config) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        config
            .format
            .as_deref()
            .and_then(|s| OutputFormat::from_str(s, true).ok())
            .unwrap_or(OutputFormat::Tsv)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for the terminal
    Tsv,
    /// RFC 4180 CSV
    Csv,
    /// Markdown table
    Md,
    /// Machine-readable JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge equipment and maintenance files into one table
    Merge(MergeArgs),

    /// List equipment codes with their types
    Codes(CodesArgs),

    /// List modules for an equipment code
    Modules(ModulesArgs),

    /// List components for an equipment code and module
    Components(ComponentsArgs),

    /// Show the records matching a selection
    Filter(FilterArgs),

    /// Summary statistics for a selection
    Stats(StatsArgs),

    /// Per-equipment summary report for the whole dataset
    Summary(SummaryArgs),

    /// Interactive cascading drill-down
    Drill(DrillArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
