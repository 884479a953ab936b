//! Placeholder interpolation
//!
//! Expands `{key}` tokens from the call context plus a few special tokens:
//!
//! - `{post_vars}`, `{get_vars}`: dumps of the current request data
//! - `{session_vars}`: dump of the session, only while a session is active
//! - `{env}`: the environment name
//! - `{env:NAME}`: an environment variable, `n/a` when unset
//! - `{file}`, `{line}`: the caller's location, resolved only when `{file}` is used
//!
//! Replacement is keyed and single-pass: tokens with no replacement are left
//! verbatim and substituted text is never scanned again.

use crate::callsite::{determine_file, StackSource};
use crate::context::{Context, ContextValue, Message};
use crate::paths::clean_file_name;
use crate::runtime::RuntimeContext;
use serde_json::Value;
use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;

/// Context key whose error value is expanded to `message file:line`
pub const EXCEPTION_KEY: &str = "exception";

/// Value substituted for unset `{env:NAME}` variables
pub const ENV_MISSING: &str = "n/a";

const ENV_PREFIX: &str = "env:";

/// Expands placeholders against a context and the runtime environment
#[derive(Clone)]
pub struct Interpolator {
    runtime: Arc<dyn RuntimeContext>,
    stack: Arc<dyn StackSource>,
}

impl Interpolator {
    pub fn new(runtime: Arc<dyn RuntimeContext>, stack: Arc<dyn StackSource>) -> Self {
        Self { runtime, stack }
    }

    pub fn runtime(&self) -> &dyn RuntimeContext {
        self.runtime.as_ref()
    }

    pub fn stack(&self) -> &dyn StackSource {
        self.stack.as_ref()
    }

    /// Replace every recognised token in `message`
    ///
    /// Non-text messages are returned unchanged. `caller` is the location of
    /// the external logging call, used for `{file}` and `{line}`.
    pub fn interpolate(
        &self,
        message: Message,
        context: &Context,
        caller: &'static Location<'static>,
    ) -> Message {
        let text = match message {
            Message::Text(text) => text,
            other => return other,
        };

        let mut replace: BTreeMap<String, String> = BTreeMap::new();

        for (key, value) in context.iter() {
            let rendered = match value {
                ContextValue::Error(record) if key == EXCEPTION_KEY => format!(
                    "{} {}:{}",
                    record.message,
                    clean_file_name(&record.file, self.runtime()),
                    record.line
                ),
                other => other.render(),
            };
            replace.insert(token(key), rendered);
        }

        replace.insert(
            token("post_vars"),
            dump("POST", &self.runtime.post_data()),
        );
        replace.insert(token("get_vars"), dump("GET", &self.runtime.get_data()));
        replace.insert(token("env"), self.runtime.environment());

        if text.contains("{file}") {
            let site = determine_file(&self.stack.frames(caller));
            replace.insert(token("line"), site.line_text());
            replace.insert(token("file"), site.file);
        }

        if text.contains(ENV_PREFIX) {
            for name in env_references(&text) {
                let value = self
                    .runtime
                    .env_var(name)
                    .unwrap_or_else(|| ENV_MISSING.to_string());
                replace.insert(token(&format!("{}{}", ENV_PREFIX, name)), value);
            }
        }

        if let Some(session) = self.runtime.session_data() {
            replace.insert(token("session_vars"), dump("SESSION", &session));
        }

        Message::Text(replace_keyed(&text, &replace))
    }
}

fn token(key: &str) -> String {
    format!("{{{}}}", key)
}

fn dump(label: &str, value: &Value) -> String {
    let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!("{}: {}", label, body)
}

/// Names following every `env:` up to the next `}` (or end of text)
fn env_references(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(ENV_PREFIX) {
        let after = &rest[pos + ENV_PREFIX.len()..];
        let end = after.find('}').unwrap_or(after.len());
        if end > 0 {
            names.push(&after[..end]);
        }
        rest = &after[end..];
    }
    names
}

/// Single-pass keyed replacement, longest key first at each position
fn replace_keyed(text: &str, replace: &BTreeMap<String, String>) -> String {
    let mut keys: Vec<(&str, &str)> = replace
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match keys.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
