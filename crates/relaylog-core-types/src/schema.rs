//! Canonical schema constants for the facility's own diagnostics
//!
//! These keys are used on `tracing` events emitted by relaylog itself,
//! never on messages routed through a handler chain.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_HANDLER: &str = "handler";

// Dispatch statistics
pub const FIELD_INVOKED: &str = "invoked";
pub const FIELD_SKIPPED: &str = "skipped";
pub const FIELD_STOPPED_BY: &str = "stopped_by";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_FILTERED: &str = "filtered";
pub const EVENT_DISPATCHED: &str = "dispatched";
pub const EVENT_HANDLER_FAULT: &str = "handler_fault";
pub const EVENT_CHAIN_STOPPED: &str = "chain_stopped";
