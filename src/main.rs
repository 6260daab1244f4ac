use anyhow::Result;
use clap::Parser;
use goalgauge::cli::{Cli, Commands};
use goalgauge::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            snapshot,
            format,
            output,
            config,
        } => commands::report::run(commands::report::ReportConfig {
            snapshot,
            format,
            output,
            config,
        }),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
