use relaylog_core_types::UnknownSeverity;
use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for
/// programmatic handling, tests and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogErrorKind {
    // Call-time
    /// Unrecognized severity passed to `log`
    InvalidArgument,

    // Construction-time
    InvalidConfig,
    MissingHandlers,
    UnknownHandler,

    // Dispatch
    HandlerFailed,

    // Shared logger
    AlreadyInstalled,
    NotInstalled,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl LogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LogErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            LogErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            LogErrorKind::MissingHandlers => "ERR_MISSING_HANDLERS",
            LogErrorKind::UnknownHandler => "ERR_UNKNOWN_HANDLER",
            LogErrorKind::HandlerFailed => "ERR_HANDLER_FAILED",
            LogErrorKind::AlreadyInstalled => "ERR_ALREADY_INSTALLED",
            LogErrorKind::NotInstalled => "ERR_NOT_INSTALLED",
            LogErrorKind::Io => "ERR_IO",
            LogErrorKind::Serialization => "ERR_SERIALIZATION",
            LogErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, handler id) for diagnostics.
#[derive(Debug, Clone)]
pub struct LogError {
    kind: LogErrorKind,
    op: Option<String>,
    handler: Option<String>,
    message: String,
}

impl LogError {
    /// Create a new error with the specified kind
    pub fn new(kind: LogErrorKind) -> Self {
        Self {
            kind,
            op: None,
            handler: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add handler id context
    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> LogErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the handler id context, if any
    pub fn handler(&self) -> Option<&str> {
        self.handler.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(handler) = &self.handler {
            write!(f, " (handler: {})", handler)?;
        }
        Ok(())
    }
}

impl std::error::Error for LogError {}

// ========== End Error Facility ==========

/// Specific failures raised inside relaylog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelayLogError {
    /// Severity name or rank not present in the level table
    #[error("{level} is an invalid log level")]
    InvalidLevel { level: String },

    /// No handler descriptors configured
    #[error("LoggerConfig must provide at least one Handler.")]
    MissingHandlers,

    /// Configured handler id has no registered factory
    #[error("No handler registered under id '{handler_id}'")]
    UnknownHandler { handler_id: String },

    /// A handler option is missing or has the wrong shape
    #[error("Invalid option '{option}' for handler '{handler_id}': {reason}")]
    InvalidHandlerOption {
        handler_id: String,
        option: String,
        reason: String,
    },

    /// Logger configuration could not be parsed or is inconsistent
    #[error("Invalid logger configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A handler reported a failure while writing a message
    #[error("Handler '{handler_id}' failed: {reason}")]
    HandlerFailed { handler_id: String, reason: String },

    /// The shared logger was installed twice
    #[error("A shared logger is already installed")]
    AlreadyInstalled,

    /// `log_message` was called before a shared logger was installed
    #[error("No shared logger installed")]
    NotInstalled,

    /// Reading a configuration file failed
    #[error("IO error during {operation}: {message}")]
    Io { operation: String, message: String },
}

/// Conversion from RelayLogError to LogError
impl From<RelayLogError> for LogError {
    fn from(err: RelayLogError) -> Self {
        let message = err.to_string();
        match err {
            RelayLogError::InvalidLevel { .. } => {
                LogError::new(LogErrorKind::InvalidArgument).with_op("log")
            }
            RelayLogError::MissingHandlers => {
                LogError::new(LogErrorKind::MissingHandlers).with_op("construct")
            }
            RelayLogError::UnknownHandler { handler_id } => {
                LogError::new(LogErrorKind::UnknownHandler)
                    .with_op("construct")
                    .with_handler(handler_id)
            }
            RelayLogError::InvalidHandlerOption { handler_id, .. } => {
                LogError::new(LogErrorKind::InvalidConfig)
                    .with_op("construct")
                    .with_handler(handler_id)
            }
            RelayLogError::InvalidConfig { .. } => {
                LogError::new(LogErrorKind::InvalidConfig).with_op("load_config")
            }
            RelayLogError::HandlerFailed { handler_id, .. } => {
                LogError::new(LogErrorKind::HandlerFailed)
                    .with_op("dispatch")
                    .with_handler(handler_id)
            }
            RelayLogError::AlreadyInstalled => {
                LogError::new(LogErrorKind::AlreadyInstalled).with_op("install")
            }
            RelayLogError::NotInstalled => {
                LogError::new(LogErrorKind::NotInstalled).with_op("log_message")
            }
            RelayLogError::Io { operation, .. } => {
                LogError::new(LogErrorKind::Io).with_op(operation)
            }
        }
        .with_message(message)
    }
}

impl From<UnknownSeverity> for RelayLogError {
    fn from(err: UnknownSeverity) -> Self {
        RelayLogError::InvalidLevel { level: err.input }
    }
}

impl From<UnknownSeverity> for LogError {
    fn from(err: UnknownSeverity) -> Self {
        RelayLogError::from(err).into()
    }
}

/// Create a serialization error
pub fn serialization_error(op: &str, err: impl std::fmt::Display) -> LogError {
    LogError::new(LogErrorKind::Serialization)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_handler() {
        let err: LogError = RelayLogError::HandlerFailed {
            handler_id: "console".to_string(),
            reason: "broken pipe".to_string(),
        }
        .into();

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_HANDLER_FAILED]"));
        assert!(rendered.contains("in operation 'dispatch'"));
        assert!(rendered.contains("broken pipe"));
        assert!(rendered.contains("(handler: console)"));
    }

    #[test]
    fn test_unknown_severity_maps_to_invalid_argument() {
        let err: LogError = UnknownSeverity {
            input: "loud".to_string(),
        }
        .into();
        assert_eq!(err.kind(), LogErrorKind::InvalidArgument);
        assert_eq!(err.message(), "loud is an invalid log level");
    }
}
