//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full directive
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Whether to include file and line of the event
    pub with_source: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "load-order".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_source: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LO_SERVICE_NAME`: Service name (default: load-order)
    /// - `LO_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `LO_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `LO_LOG_SOURCE`: Include file/line (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("LO_SERVICE_NAME").unwrap_or_else(|_| "load-order".to_string()),

            log_level: env::var("LO_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("LO_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            with_source: env::var("LO_LOG_SOURCE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Verbose configuration for test harnesses.
    pub fn for_tests() -> Self {
        Self {
            log_level: "debug".to_string(),
            with_source: true,
            ..Self::default()
        }
    }
}
