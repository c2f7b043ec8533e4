//! # Counter Dapp Runtime
//!
//! Entry point of the dapp process.
//!
//! ## Startup Sequence
//!
//! 1. Parse flags, load configuration from env and apply the flags
//! 2. Initialize logging
//! 3. Build the rollup HTTP client
//! 4. Run the protocol loop until Ctrl-C or a fatal rollup error
//!
//! A fatal rollup error (server unreachable, malformed finish response)
//! terminates the process with a non-zero exit code.

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::watch;
use tracing::{error, info};

use counter_dapp::{DappConfig, HttpRollupServer, ProtocolLoop};
use counter_telemetry::{init_logging, TelemetryConfig};

use crate::cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    args.apply_telemetry(&mut telemetry);
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let mut config = DappConfig::from_env().context("Invalid environment configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    info!("===========================================");
    info!("  Counter Dapp v{}", env!("CARGO_PKG_VERSION"));
    info!("  Rollup server: {}", config.rollup_url);
    info!("===========================================");

    let rollup = Arc::new(
        HttpRollupServer::new(&config.rollup_url, config.request_timeout)
            .context("Failed to create rollup client")?,
    );

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, stopping after the current request");
                if stop_tx.send(true).is_err() {
                    error!("Protocol loop already stopped");
                }
            }
            Err(e) => error!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    let service = ProtocolLoop::new(config, rollup);
    let stats = service
        .run(stop_rx)
        .await
        .context("Rollup protocol failure")?;

    info!(
        cycles = stats.cycles,
        handled = stats.handled(),
        notices = stats.notices,
        "Shutdown complete"
    );
    Ok(())
}
