//! namelint CLI - command-line interface for the namelint checker
//!
//! Checks naming conventions in JavaScript/TypeScript projects.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;

use cli::Cli;
use commands::Commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli);

    tracing::debug!(command = ?cli.command, "starting namelint");

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Init(args) => args.run(),
        Commands::Explain(args) => args.run(),
    }
}
