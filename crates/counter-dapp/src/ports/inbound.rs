//! Driving Ports (API - Inbound)

use async_trait::async_trait;
use shared_types::{AdvanceRequest, U256};

use crate::error::AdvanceResult;

/// Result of a successfully handled advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Payload did not carry an increment command; nothing emitted.
    Ignored,
    /// A notice with the new counter was accepted by the rollup server.
    NoticeSent { counter: U256, index: u64 },
}

impl AdvanceOutcome {
    pub fn notice_sent(&self) -> bool {
        matches!(self, AdvanceOutcome::NoticeSent { .. })
    }
}

/// Handles one advance request.
#[async_trait]
pub trait AdvanceApi: Send + Sync {
    /// Decode the payload, apply the increment rule and emit at most one
    /// notice.
    async fn handle_advance(&self, request: &AdvanceRequest) -> AdvanceResult<AdvanceOutcome>;
}
