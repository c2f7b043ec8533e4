//! # counter-dapp
//!
//! Application side of a rollup dapp with a single business rule: given a
//! counter value, emit a notice carrying that value plus one.
//!
//! ## Overview
//!
//! - **Protocol Loop**: announces the previous outcome with `finish`, fetches
//!   the next request and dispatches it by type
//! - **Advance Handler**: hex → UTF-8 → JSON → increment → notice
//! - **Stateless**: the counter lives with the caller; every payload carries
//!   the current value
//!
//! ## Architecture
//!
//! ```text
//! Rollup Server ──finish──→ ProtocolLoop ──dispatch──→ AdvanceHandler
//!       ↑                        │                          │
//!       │                  accept / reject                  │
//!       └──────────────────────notice───────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use counter_dapp::{DappConfig, HttpRollupServer, ProtocolLoop};
//!
//! let config = DappConfig::from_env()?;
//! let rollup = Arc::new(HttpRollupServer::new(&config.rollup_url, config.request_timeout)?);
//! let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
//!
//! let stats = ProtocolLoop::new(config, rollup).run(stop_rx).await?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{HttpRollupServer, MockRollupServer};
pub use config::{DappConfig, DEFAULT_ROLLUP_URL};
pub use domain::{decode_payload, next_counter, CounterCommand, LoopStats, Payload, UnknownRequestPolicy};
pub use error::{
    AdvanceError, AdvanceErrorKind, AdvanceResult, ConfigError, CounterBound, RollupError,
    RollupResult,
};
pub use ports::inbound::{AdvanceApi, AdvanceOutcome};
pub use ports::outbound::{FinishOutcome, RollupServer};
pub use service::{AdvanceHandler, ProtocolLoop};
