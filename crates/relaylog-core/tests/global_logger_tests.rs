#![allow(clippy::unwrap_used)]

use relaylog_core::global::{install, log_message, logger};
use relaylog_core::handlers::{HandlerRegistry, MemoryHandler, MemorySink};
use relaylog_core::{HandlerConfig, LogErrorKind, Logger, LoggerConfig, ThresholdSetting};
use serde_json::json;

fn shared_logger(sink: &MemorySink) -> Logger {
    let mut registry = HandlerRegistry::empty();
    registry.register("mem", MemoryHandler::factory(sink.clone()));
    let config = LoggerConfig::new(ThresholdSetting::Ceiling(8)).with_handler(
        "mem",
        HandlerConfig::new().with("handles", json!(["error", "info"])),
    );
    Logger::builder(config).registry(registry).build().unwrap()
}

// The shared logger is process-wide, so its whole lifecycle is one test.
#[test]
fn test_shared_logger_lifecycle() {
    let err = log_message("error", "too early").unwrap_err();
    assert_eq!(err.kind(), LogErrorKind::NotInstalled);
    assert!(logger().is_none());

    let sink = MemorySink::new();
    install(shared_logger(&sink)).unwrap();
    assert!(logger().is_some());

    assert!(log_message("error", "disk at {file}").unwrap());
    assert!(log_message(8, "by rank").unwrap());

    let messages = sink.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("global_logger_tests.rs"), "{}", messages[0]);
    assert_eq!(messages[1], "by rank");

    let err = install(shared_logger(&MemorySink::new())).unwrap_err();
    assert_eq!(err.kind(), LogErrorKind::AlreadyInstalled);

    let err = log_message("shout", "x").unwrap_err();
    assert_eq!(err.kind(), LogErrorKind::InvalidArgument);
}
