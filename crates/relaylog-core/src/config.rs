//! Logger configuration
//!
//! ```toml
//! threshold = 5               # or an explicit list: [1, 4, 8]
//! date_format = "Y-m-d H:i:s"
//! handler_faults = "isolate"  # or "propagate"
//!
//! [roots]
//! app = "/srv/site/app"
//!
//! [[handlers]]
//! id = "console"
//! handles = ["emergency", "alert", "critical", "error"]
//!
//! [[handlers]]
//! id = "memory"
//! handles = ["debug"]
//! buffer = "toolbar"
//! ```
//!
//! Handlers run in the order they are declared.

use crate::date_format::DateFormat;
use crate::dispatch::FaultPolicy;
use crate::errors::{RelayLogError, Result};
use crate::handlers::{HandlerConfig, HandlerDescriptor};
use crate::runtime::PathRoots;
use crate::threshold::ThresholdSetting;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub threshold: ThresholdSetting,
    #[serde(default)]
    pub date_format: DateFormat,
    #[serde(default)]
    pub handler_faults: FaultPolicy,
    #[serde(default)]
    pub roots: PathRoots,
    #[serde(default)]
    pub handlers: Vec<HandlerDescriptor>,
}

impl LoggerConfig {
    pub fn new(threshold: ThresholdSetting) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Append a handler to the end of the chain
    pub fn with_handler(mut self, id: impl Into<String>, config: HandlerConfig) -> Self {
        self.handlers.push(HandlerDescriptor::new(id, config));
        self
    }

    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = DateFormat::new(pattern);
        self
    }

    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.handler_faults = policy;
        self
    }

    pub fn with_roots(mut self, roots: PathRoots) -> Self {
        self.roots = roots;
        self
    }

    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the document does not parse or has no
    /// handlers.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LoggerConfig =
            toml::from_str(source).map_err(|e| RelayLogError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as `from_toml_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| RelayLogError::Io {
            operation: "read_config".to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&source)
    }

    /// Structural checks that do not need a handler registry
    ///
    /// # Errors
    ///
    /// Returns `MissingHandlers` when no handler is configured.
    pub fn validate(&self) -> Result<()> {
        if self.handlers.is_empty() {
            return Err(RelayLogError::MissingHandlers.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LogErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_full_document() {
        let config = LoggerConfig::from_toml_str(
            r#"
            threshold = [1, 5]
            date_format = "d/m/Y"
            handler_faults = "propagate"

            [roots]
            app = "/srv/app"

            [[handlers]]
            id = "memory"
            handles = ["debug"]
            buffer = "cfg"

            [[handlers]]
            id = "console"
            "#,
        )
        .unwrap();

        assert_eq!(config.threshold, ThresholdSetting::Ranks(vec![1, 5]));
        assert_eq!(config.date_format.pattern(), "d/m/Y");
        assert_eq!(config.handler_faults, FaultPolicy::Propagate);
        assert_eq!(config.roots.app.as_deref(), Some("/srv/app"));

        let ids: Vec<&str> = config.handlers.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["memory", "console"]);
        assert_eq!(config.handlers[0].config.get("handles"), Some(&json!(["debug"])));
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_toml_str("[[handlers]]\nid = \"console\"\n").unwrap();
        assert_eq!(config.threshold, ThresholdSetting::Ceiling(4));
        assert_eq!(config.date_format.pattern(), "Y-m-d H:i:s");
        assert_eq!(config.handler_faults, FaultPolicy::Isolate);
    }

    #[test]
    fn test_missing_handlers_rejected() {
        let err = LoggerConfig::from_toml_str("threshold = 3\n").unwrap_err();
        assert_eq!(err.kind(), LogErrorKind::MissingHandlers);
    }

    #[test]
    fn test_malformed_document() {
        let err = LoggerConfig::from_toml_str("threshold = \"loud\"\n").unwrap_err();
        assert_eq!(err.kind(), LogErrorKind::InvalidConfig);
    }

    #[test]
    fn test_missing_file_is_io() {
        let err = LoggerConfig::from_path("/nonexistent/relaylog.toml").unwrap_err();
        assert_eq!(err.kind(), LogErrorKind::Io);
    }
}
