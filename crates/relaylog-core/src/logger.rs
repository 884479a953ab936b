//! Logger facade
//!
//! Every public entry point carries `#[track_caller]` so `{file}` and
//! `{line}` resolve to the code that called the logger.

use crate::callsite::{determine_file, CallSite, CallerLocation, StackSource};
use crate::config::LoggerConfig;
use crate::context::{Context, Message};
use crate::date_format::DateFormat;
use crate::dispatch::HandlerChain;
use crate::errors::Result;
use crate::handlers::HandlerRegistry;
use crate::interpolate::Interpolator;
use crate::level_arg::LevelArg;
use crate::runtime::{ProcessContext, RuntimeContext};
use crate::threshold::ThresholdSet;
use relaylog_core_types::schema::{EVENT_DISPATCHED, EVENT_FILTERED};
use relaylog_core_types::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use std::sync::{Arc, Mutex};

/// A message kept in the debug cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: Severity,
    #[serde(rename = "msg")]
    pub message: String,
}

/// Leveled logger dispatching to a handler chain
pub struct Logger {
    threshold: ThresholdSet,
    chain: HandlerChain,
    interpolator: Interpolator,
    cache: Option<Mutex<Vec<LogEntry>>>,
}

/// Assembles a `Logger` with injectable collaborators
pub struct LoggerBuilder {
    config: LoggerConfig,
    debug: bool,
    registry: Option<HandlerRegistry>,
    runtime: Option<Arc<dyn RuntimeContext>>,
    stack: Option<Arc<dyn StackSource>>,
}

impl LoggerBuilder {
    /// Keep logged entries in memory (see `Logger::log_cache`)
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Replace the built-in handler registry
    pub fn registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn runtime(mut self, runtime: impl RuntimeContext + 'static) -> Self {
        self.runtime = Some(Arc::new(runtime));
        self
    }

    pub fn stack_source(mut self, stack: impl StackSource + 'static) -> Self {
        self.stack = Some(Arc::new(stack));
        self
    }

    /// # Errors
    ///
    /// Returns `MissingHandlers` when no handler is configured,
    /// `UnknownHandler` for an id missing from the registry, or a handler's
    /// configuration error.
    pub fn build(self) -> Result<Logger> {
        self.config.validate()?;

        let LoggerConfig {
            threshold,
            date_format,
            handler_faults,
            roots,
            handlers,
        } = self.config;

        let registry = self.registry.unwrap_or_else(HandlerRegistry::with_builtins);
        let chain = HandlerChain::new(registry, handlers, date_format, handler_faults)?;

        let runtime = self
            .runtime
            .unwrap_or_else(|| Arc::new(ProcessContext::new(roots)));
        let stack = self.stack.unwrap_or_else(|| Arc::new(CallerLocation));

        Ok(Logger {
            threshold: ThresholdSet::resolve(&threshold),
            chain,
            interpolator: Interpolator::new(runtime, stack),
            cache: self.debug.then(|| Mutex::new(Vec::new())),
        })
    }
}

impl Logger {
    /// Logger with the built-in handlers and the process environment
    ///
    /// # Errors
    ///
    /// See [`LoggerBuilder::build`].
    pub fn new(config: LoggerConfig, debug: bool) -> Result<Self> {
        Self::builder(config).debug(debug).build()
    }

    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder {
            config,
            debug: false,
            registry: None,
            runtime: None,
            stack: None,
        }
    }

    /// System is unusable.
    #[track_caller]
    pub fn emergency(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Emergency, message, context)
    }

    /// Action must be taken immediately.
    #[track_caller]
    pub fn alert(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Alert, message, context)
    }

    /// Critical conditions.
    #[track_caller]
    pub fn critical(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Critical, message, context)
    }

    /// Runtime errors that do not require immediate action.
    #[track_caller]
    pub fn error(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Error, message, context)
    }

    /// Exceptional occurrences that are not errors.
    #[track_caller]
    pub fn warning(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Warning, message, context)
    }

    /// Normal but significant events.
    #[track_caller]
    pub fn notice(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Notice, message, context)
    }

    /// Interesting events.
    #[track_caller]
    pub fn info(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Info, message, context)
    }

    /// Detailed debug information.
    #[track_caller]
    pub fn debug(&self, message: impl Into<Message>, context: &Context) -> Result<bool> {
        self.log(Severity::Debug, message, context)
    }

    /// Log at an arbitrary level
    ///
    /// Returns `Ok(false)` without side effects when the level is outside the
    /// threshold, `Ok(true)` once the message went through the chain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a level not in the level table, or a
    /// handler failure under `FaultPolicy::Propagate`.
    #[track_caller]
    pub fn log(
        &self,
        level: impl Into<LevelArg>,
        message: impl Into<Message>,
        context: &Context,
    ) -> Result<bool> {
        let caller = Location::caller();
        let level = level.into().resolve()?;

        if !self.threshold.contains(level) {
            tracing::debug!(
                component = module_path!(),
                event = EVENT_FILTERED,
                level = level.name(),
            );
            return Ok(false);
        }

        let message = self
            .interpolator
            .interpolate(message.into(), context, caller)
            .into_text();

        if let Some(cache) = &self.cache {
            let entry = LogEntry {
                level,
                message: message.clone(),
            };
            match cache.lock() {
                Ok(mut entries) => entries.push(entry),
                Err(poisoned) => poisoned.into_inner().push(entry),
            }
        }

        let report = self.chain.dispatch(level, &message)?;
        tracing::debug!(
            component = module_path!(),
            event = EVENT_DISPATCHED,
            level = level.name(),
            invoked = report.invoked.len(),
            skipped = report.skipped.len(),
            stopped_by = report.stopped_by.as_deref(),
        );

        Ok(true)
    }

    /// File and line of the code calling this method
    #[track_caller]
    pub fn determine_file(&self) -> CallSite {
        determine_file(&self.interpolator.stack().frames(Location::caller()))
    }

    /// Entries logged so far, `None` unless built in debug mode
    pub fn log_cache(&self) -> Option<Vec<LogEntry>> {
        self.cache.as_ref().map(|cache| {
            cache
                .lock()
                .map(|entries| entries.clone())
                .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
        })
    }

    pub fn threshold(&self) -> &ThresholdSet {
        &self.threshold
    }

    pub fn date_format(&self) -> &DateFormat {
        self.chain.date_format()
    }

    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }

    pub fn is_loggable(&self, level: Severity) -> bool {
        self.threshold.contains(level)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("chain", &self.chain)
            .field("caching", &self.cache.is_some())
            .finish()
    }
}
