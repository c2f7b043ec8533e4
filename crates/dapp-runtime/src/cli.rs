//! Command line arguments.
//!
//! Flags override the environment; anything not given on the command line
//! keeps the value from `DappConfig::from_env` / `TelemetryConfig::from_env`.

use std::time::Duration;

use clap::Parser;
use counter_dapp::{DappConfig, UnknownRequestPolicy};
use counter_telemetry::TelemetryConfig;

/// Counter dapp: increments counters from rollup inputs and emits notices.
#[derive(Parser, Debug, Default)]
#[command(name = "counter-dapp")]
#[command(about = "Rollup dapp that answers increment requests with notices")]
pub struct Args {
    /// Rollup HTTP server URL (overrides ROLLUP_HTTP_SERVER_URL)
    #[arg(short = 'u', long)]
    pub rollup_url: Option<String>,

    /// What to do with non-advance requests: `advance` or `reject`
    #[arg(long)]
    pub unknown_request_policy: Option<UnknownRequestPolicy>,

    /// Pause in milliseconds after a "no request pending" answer
    #[arg(long)]
    pub idle_backoff_ms: Option<u64>,

    /// Stop after this many finish calls
    #[arg(long)]
    pub max_cycles: Option<u64>,

    /// HTTP timeout in seconds for rollup server calls
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Log level filter (overrides DAPP_LOG_LEVEL / RUST_LOG)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Apply flags to the dapp configuration.
    pub fn apply(&self, config: &mut DappConfig) {
        if let Some(url) = &self.rollup_url {
            config.rollup_url = url.clone();
        }
        if let Some(policy) = self.unknown_request_policy {
            config.unknown_request_policy = policy;
        }
        if let Some(ms) = self.idle_backoff_ms {
            config.idle_backoff = Duration::from_millis(ms);
        }
        if let Some(cycles) = self.max_cycles {
            config.max_cycles = Some(cycles);
        }
        if let Some(secs) = self.request_timeout_secs {
            config.request_timeout = Some(Duration::from_secs(secs));
        }
    }

    /// Apply flags to the logging configuration.
    pub fn apply_telemetry(&self, config: &mut TelemetryConfig) {
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.json_logs {
            config.json_logs = true;
        }
    }
}
