//! Forwards messages to the `tracing` ecosystem
//!
//! Lets a relaylog chain feed whatever subscriber the host installed.
//! Always continues the chain.

use super::{BaseOptions, Handler, HandlerConfig};
use crate::date_format::DateFormat;
use crate::errors::Result;
use relaylog_core_types::Severity;

pub const ID: &str = "tracing";

/// Target used on forwarded events
pub const TARGET: &str = "relaylog::relay";

#[derive(Debug, Clone)]
pub struct TracingHandler {
    options: BaseOptions,
}

impl TracingHandler {
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed options.
    pub fn from_config(config: &HandlerConfig) -> Result<Self> {
        Ok(Self {
            options: BaseOptions::from_config(ID, config)?,
        })
    }
}

impl Handler for TracingHandler {
    fn can_handle(&self, level: Severity) -> bool {
        self.options.accepts(level)
    }

    // tracing subscribers stamp their own time
    fn set_date_format(&mut self, _format: &DateFormat) {}

    fn handle(&mut self, level: Severity, message: &str) -> Result<bool> {
        let severity = level.name();
        match level {
            Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
                tracing::error!(target: TARGET, severity, "{}", message)
            }
            Severity::Warning => tracing::warn!(target: TARGET, severity, "{}", message),
            Severity::Notice | Severity::Info => {
                tracing::info!(target: TARGET, severity, "{}", message)
            }
            Severity::Debug => tracing::debug!(target: TARGET, severity, "{}", message),
        }
        Ok(true)
    }
}
