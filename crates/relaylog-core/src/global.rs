//! Process-wide shared logger
//!
//! Hosts that want a single logger reachable from anywhere install it once
//! and log through [`log_message`].

use crate::context::{Context, Message};
use crate::errors::{RelayLogError, Result};
use crate::level_arg::LevelArg;
use crate::logger::Logger;
use std::sync::OnceLock;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// Install the shared logger
///
/// # Errors
///
/// Returns `AlreadyInstalled` if a logger was installed before.
pub fn install(logger: Logger) -> Result<()> {
    SHARED
        .set(logger)
        .map_err(|_| RelayLogError::AlreadyInstalled.into())
}

/// The shared logger, if installed
pub fn logger() -> Option<&'static Logger> {
    SHARED.get()
}

/// Log through the shared logger with an empty context
///
/// # Errors
///
/// Returns `NotInstalled` before [`install`], otherwise whatever
/// [`Logger::log`] returns.
#[track_caller]
pub fn log_message(level: impl Into<LevelArg>, message: impl Into<Message>) -> Result<bool> {
    let logger = logger().ok_or(RelayLogError::NotInstalled)?;
    logger.log(level, message, &Context::new())
}
