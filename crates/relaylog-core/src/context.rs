//! Messages and per-call interpolation context

use relaylog_core_types::{Sensitive, REDACTED};
use serde_json::Value;
use std::collections::BTreeMap;
use std::panic::Location;

/// A log message: text to interpolate, or arbitrary data to dump
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Value(Value),
}

impl Message {
    /// Final text handed to handlers
    ///
    /// Non-text messages become a pretty-printed dump.
    pub fn into_text(self) -> String {
        match self {
            Message::Text(text) => text,
            Message::Value(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Message::Text(text),
            other => Message::Value(other),
        }
    }
}

/// An error captured for the `exception` context key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            line,
        }
    }

    /// Record an error together with the location it was captured at
    #[track_caller]
    pub fn capture(err: &dyn std::error::Error) -> Self {
        let at = Location::caller();
        Self::new(err.to_string(), at.file(), at.line())
    }
}

/// A single context value
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    Text(String),
    Value(Value),
    Error(ErrorRecord),
    Redacted,
}

impl ContextValue {
    /// Replacement text for a `{key}` token
    ///
    /// Errors render as their message here; the `exception` key gets the
    /// longer `message file:line` form from the interpolator.
    pub fn render(&self) -> String {
        match self {
            ContextValue::Text(text) => text.clone(),
            ContextValue::Value(Value::String(text)) => text.clone(),
            ContextValue::Value(Value::Null) => String::new(),
            ContextValue::Value(value) => value.to_string(),
            ContextValue::Error(record) => record.message.clone(),
            ContextValue::Redacted => REDACTED.to_string(),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(text: &str) -> Self {
        ContextValue::Text(text.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(text: String) -> Self {
        ContextValue::Text(text)
    }
}

impl From<Value> for ContextValue {
    fn from(value: Value) -> Self {
        ContextValue::Value(value)
    }
}

impl From<ErrorRecord> for ContextValue {
    fn from(record: ErrorRecord) -> Self {
        ContextValue::Error(record)
    }
}

impl<T> From<Sensitive<T>> for ContextValue {
    fn from(_: Sensitive<T>) -> Self {
        ContextValue::Redacted
    }
}

macro_rules! json_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ContextValue {
                fn from(v: $t) -> Self {
                    ContextValue::Value(Value::from(v))
                }
            }
        )*
    };
}

json_from!(bool, i32, i64, u32, u64, usize, f64);

/// Per-call mapping from placeholder key to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    entries: BTreeMap<String, ContextValue>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
