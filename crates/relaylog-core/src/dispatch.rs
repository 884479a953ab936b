//! Handler chain dispatch
//!
//! Handlers run in declared order. A handler that does not accept the level
//! is skipped and the chain continues; a handler returning `false` stops the
//! chain. Handlers are materialised fresh for every message.

use crate::date_format::DateFormat;
use crate::errors::{LogError, RelayLogError, Result};
use crate::handlers::{HandlerDescriptor, HandlerRegistry};
use relaylog_core_types::schema::{EVENT_CHAIN_STOPPED, EVENT_HANDLER_FAULT};
use relaylog_core_types::Severity;
use serde::{Deserialize, Serialize};

/// What to do when a handler fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Report the fault through diagnostics and continue with the next handler
    #[default]
    Isolate,
    /// Abort the chain and return the error to the caller
    Propagate,
}

/// A handler failure absorbed under `FaultPolicy::Isolate`
#[derive(Debug, Clone)]
pub struct HandlerFault {
    pub handler: String,
    pub error: LogError,
}

/// Outcome of one dispatch
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// Handlers whose `handle` ran, in order
    pub invoked: Vec<String>,
    /// Handlers that declined the level
    pub skipped: Vec<String>,
    /// Handler that returned `false`, if any
    pub stopped_by: Option<String>,
    pub faults: Vec<HandlerFault>,
}

/// Ordered handler chain with its shared settings
#[derive(Debug, Clone)]
pub struct HandlerChain {
    registry: HandlerRegistry,
    descriptors: Vec<HandlerDescriptor>,
    date_format: DateFormat,
    fault_policy: FaultPolicy,
}

impl HandlerChain {
    /// Build and validate a chain
    ///
    /// Every descriptor must name a registered handler whose factory accepts
    /// its configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingHandlers` for an empty chain, `UnknownHandler` for an
    /// unregistered id, or the factory's own configuration error.
    pub fn new(
        registry: HandlerRegistry,
        descriptors: Vec<HandlerDescriptor>,
        date_format: DateFormat,
        fault_policy: FaultPolicy,
    ) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(RelayLogError::MissingHandlers.into());
        }

        for desc in &descriptors {
            if !registry.contains(&desc.id) {
                return Err(RelayLogError::UnknownHandler {
                    handler_id: desc.id.clone(),
                }
                .into());
            }
            registry
                .create(&desc.id, &desc.config)
                .map_err(|e| attach_handler(e, &desc.id))?;
        }

        Ok(Self {
            registry,
            descriptors,
            date_format,
            fault_policy,
        })
    }

    pub fn descriptors(&self) -> &[HandlerDescriptor] {
        &self.descriptors
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    pub fn fault_policy(&self) -> FaultPolicy {
        self.fault_policy
    }

    /// Run `message` through the chain
    ///
    /// # Errors
    ///
    /// Under `FaultPolicy::Propagate`, returns the first handler failure.
    pub fn dispatch(&self, level: Severity, message: &str) -> Result<DispatchReport> {
        let mut report = DispatchReport::default();

        for desc in &self.descriptors {
            let id = desc.id.as_str();

            let outcome = self
                .registry
                .create(id, &desc.config)
                .and_then(|mut handler| {
                    if !handler.can_handle(level) {
                        return Ok(None);
                    }
                    handler.set_date_format(&self.date_format);
                    handler.handle(level, message).map(Some)
                });

            match outcome {
                Ok(None) => report.skipped.push(id.to_string()),
                Ok(Some(true)) => report.invoked.push(id.to_string()),
                Ok(Some(false)) => {
                    report.invoked.push(id.to_string());
                    report.stopped_by = Some(id.to_string());
                    tracing::debug!(
                        component = module_path!(),
                        event = EVENT_CHAIN_STOPPED,
                        handler = id,
                        level = level.name(),
                    );
                    break;
                }
                Err(err) => {
                    let err = attach_handler(err, id);
                    match self.fault_policy {
                        FaultPolicy::Propagate => return Err(err),
                        FaultPolicy::Isolate => {
                            tracing::warn!(
                                component = module_path!(),
                                event = EVENT_HANDLER_FAULT,
                                handler = id,
                                level = level.name(),
                                err.code = err.code(),
                                err.kind = ?err.kind(),
                                "{}",
                                err.message(),
                            );
                            report.faults.push(HandlerFault {
                                handler: id.to_string(),
                                error: err,
                            });
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}

fn attach_handler(err: LogError, id: &str) -> LogError {
    if err.handler().is_some() {
        err
    } else {
        err.with_handler(id)
    }
}
