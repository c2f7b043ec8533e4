//! Advance request handling.
//!
//! ```text
//! Start ──decode──→ Decoded ──parse──→ Parsed ──┬──→ Ignored ────→ Done
//!   │                  │                        └──→ NoticeSent ─→ Done
//!   └──────────────────┴──── error ───────────────────────────────→ Done(err)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{u256_to_word, AdvanceRequest, Notice};
use tracing::info;

use crate::domain::{decode_payload, CounterCommand};
use crate::error::{AdvanceError, AdvanceResult};
use crate::ports::inbound::{AdvanceApi, AdvanceOutcome};
use crate::ports::outbound::RollupServer;

/// Applies the increment rule to advance requests and emits notices.
pub struct AdvanceHandler<R: RollupServer> {
    rollup: Arc<R>,
}

impl<R: RollupServer> AdvanceHandler<R> {
    pub fn new(rollup: Arc<R>) -> Self {
        Self { rollup }
    }
}

#[async_trait]
impl<R: RollupServer> AdvanceApi for AdvanceHandler<R> {
    async fn handle_advance(&self, request: &AdvanceRequest) -> AdvanceResult<AdvanceOutcome> {
        let raw = serde_json::to_string(request).map_err(|e| AdvanceError::Serialize(e.to_string()))?;
        info!(request = %raw, "Received advance request data");

        let payload = decode_payload(&request.payload)?;
        info!(payload = ?payload, "Parsed payload");

        let Some(command) = CounterCommand::from_payload(&payload) else {
            info!("Invalid method or missing counter value in payload");
            return Ok(AdvanceOutcome::Ignored);
        };

        let counter = command.apply()?;
        info!(counter = %counter, "Counter incremented");

        let notice = Notice::new(u256_to_word(counter));
        let response = self
            .rollup
            .send_notice(notice)
            .await
            .map_err(AdvanceError::NoticeDelivery)?;

        info!(index = response.index, "Notice sent");
        Ok(AdvanceOutcome::NoticeSent {
            counter,
            index: response.index,
        })
    }
}
