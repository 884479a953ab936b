//! Check command
//!
//! Usage: relaylog check --config <FILE>

use clap::Args;
use relaylog_core::{Logger, LoggerConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Logger configuration (TOML)
    #[arg(long)]
    pub config: PathBuf,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggerConfig::from_path(&args.config)?;
    let logger = Logger::new(config, false)?;
    let chain = logger.chain();

    println!("✓ Configuration OK");
    println!("date_format: {}", chain.date_format().pattern());
    println!("handler_faults: {:?}", chain.fault_policy());
    for (position, desc) in chain.descriptors().iter().enumerate() {
        let handles = desc
            .config
            .get("handles")
            .map(|v| v.to_string())
            .unwrap_or_else(|| "[]".to_string());
        println!("{}. {} handles={}", position + 1, desc.id, handles);
    }

    Ok(())
}
