//! Logging macro

/// Log with inline context entries
///
/// # Example
///
/// ```
/// use relaylog_core::handlers::HandlerConfig;
/// use relaylog_core::threshold::ThresholdSetting;
/// use relaylog_core::{relay_log, Logger, LoggerConfig, Severity};
///
/// let config = LoggerConfig::new(ThresholdSetting::Ceiling(8))
///     .with_handler("memory", HandlerConfig::new().with("buffer", "macro_doc"));
/// let logger = Logger::new(config, true).unwrap();
///
/// relay_log!(logger, Severity::Info, "user {name} logged in", name = "alice").unwrap();
/// relay_log!(logger, "notice", "plain").unwrap();
///
/// let cache = logger.log_cache().unwrap();
/// assert_eq!(cache[0].message, "user alice logged in");
/// ```
#[macro_export]
macro_rules! relay_log {
    ($logger:expr, $level:expr, $msg:expr) => {
        $logger.log($level, $msg, &$crate::context::Context::new())
    };
    ($logger:expr, $level:expr, $msg:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $logger.log(
            $level,
            $msg,
            &$crate::context::Context::new()$(.with(stringify!($key), $value))+,
        )
    };
}
