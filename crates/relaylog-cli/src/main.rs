//! relaylog CLI
//!
//! Command-line front end for exercising a logger configuration

use clap::{Parser, Subcommand};
use relaylog_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "relaylog")]
#[command(about = "relaylog - Leveled logging with handler chains", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log one message through a configured handler chain
    Emit(commands::emit::EmitArgs),
    /// Show which levels a configuration lets through
    Levels(commands::levels::LevelsArgs),
    /// Validate a configuration and print its handler chain
    Check(commands::check::CheckArgs),
}

fn main() {
    init(Profile::Production);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Levels(args) => commands::levels::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
