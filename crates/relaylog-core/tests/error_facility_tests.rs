use relaylog_core::errors::{LogError, LogErrorKind, RelayLogError};

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (LogErrorKind::InvalidArgument, "ERR_INVALID_ARGUMENT"),
        (LogErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (LogErrorKind::MissingHandlers, "ERR_MISSING_HANDLERS"),
        (LogErrorKind::UnknownHandler, "ERR_UNKNOWN_HANDLER"),
        (LogErrorKind::HandlerFailed, "ERR_HANDLER_FAILED"),
        (LogErrorKind::AlreadyInstalled, "ERR_ALREADY_INSTALLED"),
        (LogErrorKind::NotInstalled, "ERR_NOT_INSTALLED"),
        (LogErrorKind::Io, "ERR_IO"),
        (LogErrorKind::Serialization, "ERR_SERIALIZATION"),
        (LogErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_invalid_level_conversion() {
    let err: LogError = RelayLogError::InvalidLevel {
        level: "7b".to_string(),
    }
    .into();

    assert_eq!(err.kind(), LogErrorKind::InvalidArgument);
    assert_eq!(err.op(), Some("log"));
    assert_eq!(err.message(), "7b is an invalid log level");
}

#[test]
fn test_unknown_handler_conversion_keeps_handler_id() {
    let err: LogError = RelayLogError::UnknownHandler {
        handler_id: "pager".to_string(),
    }
    .into();

    assert_eq!(err.kind(), LogErrorKind::UnknownHandler);
    assert_eq!(err.handler(), Some("pager"));
    assert_eq!(err.op(), Some("construct"));
}

#[test]
fn test_invalid_option_is_config_error() {
    let err: LogError = RelayLogError::InvalidHandlerOption {
        handler_id: "console".to_string(),
        option: "stream".to_string(),
        reason: "unknown stream 'tty'".to_string(),
    }
    .into();

    assert_eq!(err.kind(), LogErrorKind::InvalidConfig);
    assert!(err.message().contains("stream"));
    assert!(err.to_string().contains("(handler: console)"));
}

#[test]
fn test_io_conversion_uses_operation() {
    let err: LogError = RelayLogError::Io {
        operation: "read_config".to_string(),
        message: "denied".to_string(),
    }
    .into();

    assert_eq!(err.kind(), LogErrorKind::Io);
    assert_eq!(err.op(), Some("read_config"));
}

#[test]
fn test_builder_context() {
    let err = LogError::new(LogErrorKind::Internal)
        .with_op("dispatch")
        .with_handler("memory")
        .with_message("lock poisoned");

    assert_eq!(
        err.to_string(),
        "[ERR_INTERNAL] in operation 'dispatch': lock poisoned (handler: memory)"
    );
}
