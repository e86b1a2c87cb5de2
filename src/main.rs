use clap::Parser;
use emt::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Merge(args) => emt::cli::commands::merge::run(args, &global),
        Commands::Codes(args) => emt::cli::commands::codes::run(args, &global),
        Commands::Modules(args) => emt::cli::commands::modules::run(args, &global),
        Commands::Components(args) => emt::cli::commands::components::run(args, &global),
        Commands::Filter(args) => emt::cli::commands::filter::run(args, &global),
        Commands::Stats(args) => emt::cli::commands::stats::run(args, &global),
        Commands::Summary(args) => emt::cli::commands::summary::run(args, &global),
        Commands::Drill(args) => emt::cli::commands::drill::run(args, &global),
        Commands::Completions(args) => emt::cli::commands::completions::run(args),
    }
}
