//! # LO Telemetry
//!
//! Logging setup for binaries and test harnesses that embed the load order
//! engine. The engine itself only emits `tracing` events; this crate decides
//! where they go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lo_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Sort events are now logged
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LO_SERVICE_NAME` | `load-order` | Service name on the startup event |
//! | `LO_LOG_LEVEL` | `info` | Log level filter |
//! | `LO_JSON_LOGS` | `false` | JSON formatted output |
//! | `LO_LOG_SOURCE` | `false` | Include file and line |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use std::sync::Once;
use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Initialize structured logging from `config`.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)
}

static TEST_LOGGING: Once = Once::new();

/// Installs verbose logging once per test binary; later calls are no-ops.
pub fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        if let Err(e) = init_logging(&TelemetryConfig::for_tests()) {
            eprintln!("Test logging not installed: {e}");
        }
    });
}
