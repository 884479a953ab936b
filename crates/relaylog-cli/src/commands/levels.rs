//! Levels command
//!
//! Usage: relaylog levels --config <FILE>

use clap::Args;
use relaylog_core::{LoggerConfig, ThresholdSet};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LevelsArgs {
    /// Logger configuration (TOML)
    #[arg(long)]
    pub config: PathBuf,
}

/// Execute levels command
pub fn execute(args: LevelsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggerConfig::from_path(&args.config)?;
    let threshold = ThresholdSet::resolve(&config.threshold);

    if threshold.is_empty() {
        println!("(no levels enabled)");
    }
    for level in threshold.iter() {
        println!("{} {}", level.rank(), level);
    }

    Ok(())
}
