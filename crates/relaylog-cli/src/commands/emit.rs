//! Emit command
//!
//! Usage: relaylog emit --config <FILE> [--debug] <LEVEL> <MESSAGE> [-c key=value]...

use clap::Args;
use relaylog_core::errors::serialization_error;
use relaylog_core::{Context, LevelArg, Logger, LoggerConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Logger configuration (TOML)
    #[arg(long)]
    pub config: PathBuf,

    /// Keep the message cache and print it after logging
    #[arg(long)]
    pub debug: bool,

    /// Severity name (`error`) or rank (`4`)
    pub level: String,

    /// Message, may contain `{key}` placeholders
    pub message: String,

    /// Context entry used for placeholders
    #[arg(short = 'c', long = "context", value_parser = parse_context_entry)]
    pub context: Vec<(String, String)>,
}

fn parse_context_entry(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggerConfig::from_path(&args.config)?;
    let logger = Logger::new(config, args.debug)?;

    let mut context = Context::new();
    for (key, value) in args.context {
        context.insert(key, value);
    }

    let logged = logger.log(LevelArg::from(args.level), args.message, &context)?;
    println!("{}", if logged { "logged" } else { "filtered" });

    if let Some(cache) = logger.log_cache() {
        let json =
            serde_json::to_string_pretty(&cache).map_err(|e| serialization_error("emit", e))?;
        println!("{}", json);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_context_entry() {
        assert_eq!(
            parse_context_entry("user=bob=admin").unwrap(),
            ("user".to_string(), "bob=admin".to_string())
        );
        assert!(parse_context_entry("novalue").is_err());
        assert!(parse_context_entry("=x").is_err());
    }
}
