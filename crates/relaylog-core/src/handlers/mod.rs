//! Handler capability, configuration and registry
//!
//! A handler is materialised from its configuration on every dispatch. The
//! registry maps configured handler ids to factories; every configured id
//! must resolve when a logger is built.

pub mod console;
pub mod memory;
pub mod tracing_bridge;

use crate::date_format::DateFormat;
use crate::errors::{LogError, RelayLogError, Result};
use relaylog_core_types::Severity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

pub use console::ConsoleHandler;
pub use memory::{MemoryHandler, MemoryRecord, MemorySink};
pub use tracing_bridge::TracingHandler;

/// What the dispatcher requires of an output handler
pub trait Handler {
    /// Handler-local level filter, independent of the logger threshold
    fn can_handle(&self, level: Severity) -> bool;

    /// Date format shared by the whole chain
    fn set_date_format(&mut self, format: &DateFormat);

    /// Write a message
    ///
    /// Returns `Ok(true)` to let the next handler run, `Ok(false)` to stop
    /// the chain here.
    ///
    /// # Errors
    ///
    /// Returns `HandlerFailed` when the message could not be written.
    fn handle(&mut self, level: Severity, message: &str) -> Result<bool>;
}

/// Opaque key/value options of one handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerConfig(Map<String, Value>);

impl HandlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Optional string option
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the option is present but not a string.
    pub fn str_opt(&self, handler_id: &str, key: &str) -> Result<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(invalid_option(handler_id, key, "expected a string")),
        }
    }

    /// Boolean option with a default
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the option is present but not a boolean.
    pub fn bool_or(&self, handler_id: &str, key: &str, default: bool) -> Result<bool> {
        match self.0.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(invalid_option(handler_id, key, "expected a boolean")),
        }
    }

    /// Optional positive integer option
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the option is present but not a positive
    /// integer.
    pub fn positive_opt(&self, handler_id: &str, key: &str) -> Result<Option<usize>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .filter(|n| *n > 0)
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| invalid_option(handler_id, key, "expected a positive integer")),
        }
    }
}

fn invalid_option(handler_id: &str, key: &str, reason: &str) -> LogError {
    RelayLogError::InvalidHandlerOption {
        handler_id: handler_id.to_string(),
        option: key.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// One configured handler: registry id plus its options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerDescriptor {
    pub id: String,
    #[serde(flatten)]
    pub config: HandlerConfig,
}

impl HandlerDescriptor {
    pub fn new(id: impl Into<String>, config: HandlerConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }
}

/// Options every built-in handler understands
///
/// - `handles`: severity names this handler writes; missing or empty means none
/// - `propagate`: value returned after writing (default `true`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseOptions {
    pub handles: HashSet<Severity>,
    pub propagate: bool,
}

impl BaseOptions {
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed options or unknown severity names.
    pub fn from_config(handler_id: &str, config: &HandlerConfig) -> Result<Self> {
        let handles: HashSet<Severity> = match config.get("handles") {
            None => HashSet::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .ok_or_else(|| invalid_option(handler_id, "handles", "expected strings"))?
                        .parse::<Severity>()
                        .map_err(|e| invalid_option(handler_id, "handles", &e.to_string()))
                })
                .collect::<Result<_>>()?,
            Some(_) => return Err(invalid_option(handler_id, "handles", "expected a list")),
        };

        Ok(Self {
            handles,
            propagate: config.bool_or(handler_id, "propagate", true)?,
        })
    }

    pub fn accepts(&self, level: Severity) -> bool {
        self.handles.contains(&level)
    }
}

/// `LEVEL - date --> message`
pub fn format_line(level: Severity, date: &str, message: &str) -> String {
    format!("{} - {} --> {}", level.name().to_uppercase(), date, message)
}

/// Builds a handler from its configuration
pub type HandlerFactory = Arc<dyn Fn(&HandlerConfig) -> Result<Box<dyn Handler>> + Send + Sync>;

/// Closed mapping from handler id to factory
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    factories: BTreeMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    /// Registry with no handlers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with `console`, `memory` and `tracing`
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(console::ID, |config| {
            Ok(Box::new(ConsoleHandler::from_config(config)?) as Box<dyn Handler>)
        });
        registry.register(memory::ID, |config| {
            Ok(Box::new(MemoryHandler::from_config(config)?) as Box<dyn Handler>)
        });
        registry.register(tracing_bridge::ID, |config| {
            Ok(Box::new(TracingHandler::from_config(config)?) as Box<dyn Handler>)
        });
        registry
    }

    /// Register (or replace) a factory
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&HandlerConfig) -> Result<Box<dyn Handler>> + Send + Sync + 'static,
    {
        self.factories.insert(id.into(), Arc::new(factory));
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Materialise a handler
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandler` if `id` is not registered, or whatever the
    /// factory reports for a bad configuration.
    pub fn create(&self, id: &str, config: &HandlerConfig) -> Result<Box<dyn Handler>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| RelayLogError::UnknownHandler {
                handler_id: id.to_string(),
            })?;
        factory(config)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("ids", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
