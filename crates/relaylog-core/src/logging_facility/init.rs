//! Diagnostics initialization
//!
//! Provides a single initialization point for the facility's own tracing
//! output.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Diagnostics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No output; tests install a capture layer instead
    Test,
}

static INIT_ONCE: Once = Once::new();

const DEV_FILTER: &str = "relaylog_core=debug,relaylog=debug";
const PROD_FILTER: &str = "relaylog_core=info,relaylog=info";

/// Initialize diagnostics output
///
/// Later calls are no-ops, as is a call made after another global
/// subscriber was installed.
///
/// # Profiles
///
/// - **Development**: human-readable, debug level unless `RUST_LOG` says otherwise
/// - **Production**: JSON, info level unless `RUST_LOG` says otherwise
/// - **Test**: bare registry
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEV_FILTER)),
                )
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(PROD_FILTER)),
                )
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
        // Another subscriber won the race; keep it.
        installed.ok();
    });
}
