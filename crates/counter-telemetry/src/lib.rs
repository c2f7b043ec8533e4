//! # Counter Telemetry
//!
//! Logging configuration for the counter dapp.
//!
//! The configuration is an explicit value: build it once (usually with
//! [`TelemetryConfig::from_env`]) and pass it to [`init_logging`]. Nothing
//! else in the workspace touches subscriber state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use counter_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
