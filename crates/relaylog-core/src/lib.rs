//! relaylog core - leveled, multi-handler logging facility
//!
//! A log call passes through:
//!
//! 1. level resolution against the fixed level table
//! 2. the threshold check (filtered calls return `false`, nothing else happens)
//! 3. placeholder interpolation against the call context and runtime context
//! 4. the optional in-memory debug cache
//! 5. the handler chain, where any handler may stop further propagation
//!
//! Everything runs synchronously on the calling thread.
//!
//! # Example
//!
//! ```
//! use relaylog_core::handlers::{HandlerConfig, HandlerRegistry, MemoryHandler, MemorySink};
//! use relaylog_core::{Context, Logger, LoggerConfig, ThresholdSetting};
//! use serde_json::json;
//!
//! let sink = MemorySink::new();
//! let mut registry = HandlerRegistry::with_builtins();
//! registry.register("audit", MemoryHandler::factory(sink.clone()));
//!
//! let config = LoggerConfig::new(ThresholdSetting::Ceiling(4))
//!     .with_handler("audit", HandlerConfig::new().with("handles", json!(["error"])));
//! let logger = Logger::builder(config).registry(registry).build().unwrap();
//!
//! let ctx = Context::new().with("name", "alice");
//! assert!(logger.error("login failed for {name}", &ctx).unwrap());
//! assert!(!logger.info("not recorded", &ctx).unwrap());
//! assert_eq!(sink.messages(), vec!["login failed for alice".to_string()]);
//! ```

pub mod callsite;
pub mod config;
pub mod context;
pub mod date_format;
pub mod dispatch;
pub mod errors;
pub mod global;
pub mod handlers;
pub mod interpolate;
pub mod level_arg;
pub mod logger;
pub mod logging_facility;
pub mod macros;
pub mod paths;
pub mod runtime;
pub mod threshold;

// Re-export commonly used types
pub use callsite::CallSite;
pub use config::LoggerConfig;
pub use context::{Context, ContextValue, ErrorRecord, Message};
pub use date_format::DateFormat;
pub use dispatch::FaultPolicy;
pub use errors::{LogError, LogErrorKind, RelayLogError, Result};
pub use global::log_message;
pub use handlers::{Handler, HandlerConfig, HandlerRegistry};
pub use level_arg::LevelArg;
pub use logger::{LogEntry, Logger, LoggerBuilder};
pub use relaylog_core_types::{Sensitive, Severity};
pub use runtime::{RuntimeContext, StaticContext};
pub use threshold::{ThresholdSet, ThresholdSetting};
