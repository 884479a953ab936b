//! Call-site resolution for `{file}` / `{line}` placeholders
//!
//! The host supplies the current call stack through `StackSource`; the pure
//! [`determine_file`] filter picks the first frame that does not belong to
//! the logging subsystem.
//!
//! The default source, `CallerLocation`, relies on `#[track_caller]` being
//! carried through every public logging entry point, so the location it
//! receives is already the external caller's.

use std::fmt;
use std::panic::Location;

/// Function names that belong to the logging subsystem itself
pub const INTERNAL_FUNCTIONS: [&str; 4] = ["interpolate", "determine_file", "log", "log_message"];

const UNKNOWN: &str = "unknown";

/// One frame of a call stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl Frame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }

    /// Frame with no location information
    pub fn bare(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            file: None,
            line: None,
        }
    }

    fn is_internal(&self) -> bool {
        INTERNAL_FUNCTIONS.contains(&self.function.as_str())
    }
}

/// Resolved file and line of a logging call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: Option<u32>,
}

impl CallSite {
    pub fn unknown() -> Self {
        Self {
            file: UNKNOWN.to_string(),
            line: None,
        }
    }

    /// Line as placeholder text, `unknown` when absent
    pub fn line_text(&self) -> String {
        self.line
            .map(|l| l.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line_text())
    }
}

/// Select the first frame that is not part of the logging subsystem
pub fn determine_file(frames: &[Frame]) -> CallSite {
    frames
        .iter()
        .find(|frame| !frame.is_internal())
        .map(|frame| CallSite {
            file: frame.file.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            line: frame.line,
        })
        .unwrap_or_else(CallSite::unknown)
}

/// Provider of the current call stack, innermost frame first
pub trait StackSource: Send + Sync {
    /// `caller` is the location propagated through `#[track_caller]`
    fn frames(&self, caller: &'static Location<'static>) -> Vec<Frame>;
}

/// Default stack source built from the tracked caller location
#[derive(Debug, Clone, Copy, Default)]
pub struct CallerLocation;

impl StackSource for CallerLocation {
    fn frames(&self, caller: &'static Location<'static>) -> Vec<Frame> {
        vec![Frame::new("<caller>", caller.file(), caller.line())]
    }
}
