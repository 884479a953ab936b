//! Console handler: one line per message on stderr or stdout

use super::{format_line, BaseOptions, Handler, HandlerConfig};
use crate::date_format::DateFormat;
use crate::errors::{RelayLogError, Result};
use chrono::Local;
use relaylog_core_types::Severity;
use std::io::Write;

pub const ID: &str = "console";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Options: `handles`, `propagate`, `stream` (`"stderr"` default, or `"stdout"`)
#[derive(Debug, Clone)]
pub struct ConsoleHandler {
    options: BaseOptions,
    stream: Stream,
    date_format: DateFormat,
}

impl ConsoleHandler {
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed options or an unknown stream.
    pub fn from_config(config: &HandlerConfig) -> Result<Self> {
        let stream = match config.str_opt(ID, "stream")? {
            None | Some("stderr") => Stream::Stderr,
            Some("stdout") => Stream::Stdout,
            Some(other) => {
                return Err(RelayLogError::InvalidHandlerOption {
                    handler_id: ID.to_string(),
                    option: "stream".to_string(),
                    reason: format!("unknown stream '{}'", other),
                }
                .into())
            }
        };

        Ok(Self {
            options: BaseOptions::from_config(ID, config)?,
            stream,
            date_format: DateFormat::default(),
        })
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }
}

impl Handler for ConsoleHandler {
    fn can_handle(&self, level: Severity) -> bool {
        self.options.accepts(level)
    }

    fn set_date_format(&mut self, format: &DateFormat) {
        self.date_format = format.clone();
    }

    fn handle(&mut self, level: Severity, message: &str) -> Result<bool> {
        let line = format_line(level, &self.date_format.format(&Local::now()), message);

        let written = match self.stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
        written.map_err(|e| RelayLogError::HandlerFailed {
            handler_id: ID.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self.options.propagate)
    }
}
