//! In-memory handler
//!
//! Records land in a `MemorySink`. Configured through the registry, the sink
//! is looked up by the `buffer` option in a process-wide table of named
//! sinks (`"default"` when unset); embedders can instead bind a sink of
//! their own with [`MemoryHandler::factory`].
//!
//! Sinks and the named-sink table live for the whole process. Without the
//! `capacity` option a sink keeps every record, so unbounded use belongs to
//! diagnostics and tests; long-running configurations should set
//! `capacity` to keep only the newest records.

use super::{format_line, BaseOptions, Handler, HandlerConfig};
use crate::date_format::DateFormat;
use crate::errors::Result;
use chrono::Local;
use relaylog_core_types::Severity;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

pub const ID: &str = "memory";

const DEFAULT_BUFFER: &str = "default";

/// One stored message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRecord {
    pub level: Severity,
    pub message: String,
    /// Fully formatted line, date included
    pub line: String,
}

/// Shared, cloneable record buffer
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<MemoryRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, dropping the oldest beyond `capacity`
    fn push(&self, record: MemoryRecord, capacity: Option<usize>) {
        let mut records = match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(record);
        if let Some(capacity) = capacity {
            let excess = records.len().saturating_sub(capacity);
            records.drain(..excess);
        }
    }

    /// Snapshot of all records
    pub fn records(&self) -> Vec<MemoryRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }
}

static NAMED_SINKS: OnceLock<Mutex<HashMap<String, MemorySink>>> = OnceLock::new();

/// Options: `handles`, `propagate`, `buffer`, `capacity`
#[derive(Debug, Clone)]
pub struct MemoryHandler {
    options: BaseOptions,
    capacity: Option<usize>,
    sink: MemorySink,
    date_format: DateFormat,
}

impl MemoryHandler {
    /// Named sink from the process-wide table, created on first use
    pub fn buffer(name: &str) -> MemorySink {
        let table = NAMED_SINKS.get_or_init(|| Mutex::new(HashMap::new()));
        let mut table = match table.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        table.entry(name.to_string()).or_default().clone()
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed options.
    pub fn from_config(config: &HandlerConfig) -> Result<Self> {
        let name = config.str_opt(ID, "buffer")?.unwrap_or(DEFAULT_BUFFER);
        Self::with_sink(config, Self::buffer(name))
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed options.
    pub fn with_sink(config: &HandlerConfig, sink: MemorySink) -> Result<Self> {
        Ok(Self {
            options: BaseOptions::from_config(ID, config)?,
            capacity: config.positive_opt(ID, "capacity")?,
            sink,
            date_format: DateFormat::default(),
        })
    }

    /// Registry factory writing into `sink`
    pub fn factory(
        sink: MemorySink,
    ) -> impl Fn(&HandlerConfig) -> Result<Box<dyn Handler>> + Send + Sync + 'static {
        move |config| Ok(Box::new(Self::with_sink(config, sink.clone())?) as Box<dyn Handler>)
    }
}

impl Handler for MemoryHandler {
    fn can_handle(&self, level: Severity) -> bool {
        self.options.accepts(level)
    }

    fn set_date_format(&mut self, format: &DateFormat) {
        self.date_format = format.clone();
    }

    fn handle(&mut self, level: Severity, message: &str) -> Result<bool> {
        let line = format_line(level, &self.date_format.format(&Local::now()), message);
        self.sink.push(
            MemoryRecord {
                level,
                message: message.to_string(),
                line,
            },
            self.capacity,
        );
        Ok(self.options.propagate)
    }
}
