//! Diagnostics for relaylog itself
//!
//! The facility reports what it does (filtered calls, dispatch results,
//! isolated handler faults) as `tracing` events, never through a relaylog
//! chain. This module provides:
//!
//! - Single initialization point via `init(profile)` for binaries
//! - Test capture mode for deterministic assertions on those events
//!
//! # Usage
//!
//! ```rust
//! use relaylog_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
