//! LocDiff CLI
//!
//! Command-line interface for comparing localization text snapshots

use clap::{Parser, Subcommand};

mod commands;
mod settings;

#[derive(Debug, Parser)]
#[command(name = "locdiff")]
#[command(about = "LocDiff - Snapshot diff for delimiter-structured localization text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two snapshots and write a diff report
    Compare(commands::compare::CompareArgs),
    /// Show the chunk plan of a single record
    Chunk(commands::chunk::ChunkArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Chunk(args) => commands::chunk::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
