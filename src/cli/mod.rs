//! fntconv CLI - Command-line interface for bitmap font descriptor conversion

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "fntconv")]
#[command(about = "fntconv: bitmap font descriptor conversion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the fntconv CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
