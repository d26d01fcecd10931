mod commands;
mod entity;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check::CheckArgs, show::ShowArgs};

#[derive(Parser)]
#[command(name = "planshow", about = "Inspect encoded query-plan fragments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a fragment and print it
    Show(ShowArgs),
    /// Validate that a fragment decodes cleanly
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}
