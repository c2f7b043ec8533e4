//! Ports for the counter dapp
//!
//! - `inbound`: what the loop drives (advance handling)
//! - `outbound`: what the dapp needs from the rollup server

pub mod inbound;
pub mod outbound;

pub use inbound::{AdvanceApi, AdvanceOutcome};
pub use outbound::{FinishOutcome, RollupServer};
