use relaylog_core::date_format::DateFormat;
use relaylog_core::handlers::{Handler, HandlerConfig, HandlerRegistry};
use relaylog_core::runtime::StaticContext;
use relaylog_core::{Logger, LoggerConfig, RelayLogError, Result, Severity, ThresholdSetting};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// One `handle` invocation seen by a recording handler
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub struct Call {
    pub handler: String,
    pub level: Severity,
    pub message: String,
    pub date_format: String,
}

/// Shared log of handler invocations across all recording handlers
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

#[allow(dead_code)]
impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn handlers(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.handler).collect()
    }
}

/// How a recording handler behaves
#[derive(Debug, Clone)]
pub enum Reply {
    Continue,
    Stop,
    Fail,
}

struct RecordingHandler {
    id: String,
    accepts: HashSet<Severity>,
    reply: Reply,
    date_format: String,
    log: CallLog,
}

impl Handler for RecordingHandler {
    fn can_handle(&self, level: Severity) -> bool {
        self.accepts.contains(&level)
    }

    fn set_date_format(&mut self, format: &DateFormat) {
        self.date_format = format.pattern().to_string();
    }

    fn handle(&mut self, level: Severity, message: &str) -> Result<bool> {
        self.log.0.lock().unwrap().push(Call {
            handler: self.id.clone(),
            level,
            message: message.to_string(),
            date_format: self.date_format.clone(),
        });
        match self.reply {
            Reply::Continue => Ok(true),
            Reply::Stop => Ok(false),
            Reply::Fail => Err(RelayLogError::HandlerFailed {
                handler_id: self.id.clone(),
                reason: "sink unavailable".to_string(),
            }
            .into()),
        }
    }
}

/// Register a recording handler under `id`
#[allow(dead_code)]
pub fn register_recorder(
    registry: &mut HandlerRegistry,
    id: &str,
    accepts: &[Severity],
    reply: Reply,
    log: &CallLog,
) {
    let id_owned = id.to_string();
    let accepts: HashSet<Severity> = accepts.iter().copied().collect();
    let log = log.clone();
    registry.register(id, move |_config: &HandlerConfig| {
        Ok(Box::new(RecordingHandler {
            id: id_owned.clone(),
            accepts: accepts.clone(),
            reply: reply.clone(),
            date_format: String::new(),
            log: log.clone(),
        }) as Box<dyn Handler>)
    });
}

/// Logger over recording handlers `ids` (already registered)
#[allow(dead_code)]
pub fn build_logger(
    threshold: ThresholdSetting,
    registry: HandlerRegistry,
    ids: &[&str],
    runtime: StaticContext,
    debug: bool,
) -> Logger {
    let mut config = LoggerConfig::new(threshold);
    for id in ids {
        config = config.with_handler(*id, HandlerConfig::new());
    }
    Logger::builder(config)
        .registry(registry)
        .runtime(runtime)
        .debug(debug)
        .build()
        .expect("logger should build")
}

/// Logger with one recorder accepting every level
#[allow(dead_code)]
pub fn recording_logger(threshold: ThresholdSetting) -> (Logger, CallLog) {
    let log = CallLog::default();
    let mut registry = HandlerRegistry::empty();
    register_recorder(&mut registry, "rec", &Severity::ALL, Reply::Continue, &log);
    let logger = build_logger(
        threshold,
        registry,
        &["rec"],
        StaticContext::new("testing"),
        true,
    );
    (logger, log)
}
