//! Core types shared across relaylog crates
//!
//! This crate provides the leaf types used by the logging facility
//! and its front ends:
//!
//! - **Level table**: `Severity` and its fixed numeric ranks
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names for internal diagnostics

pub mod level;
pub mod schema;
pub mod sensitive;

pub use level::{Severity, UnknownSeverity};
pub use sensitive::{Sensitive, REDACTED};
