//! Protocol loop - the finish → fetch → dispatch cycle
//!
//! ```text
//!        ┌──────────────────────────────────────────────────────┐
//!        ↓                                                      │
//!  finish(status) ──202──→ idle ────────────────────────────────┤
//!        │                                                      │
//!        └──request──→ dispatch ──ok──→ status = accept ────────┤
//!                          │                                    │
//!                          └──err──→ log, status = reject ──────┘
//! ```
//!
//! One request is outstanding at a time. A request that has been received
//! is always handled to completion before the loop looks at the stop signal
//! again.

use std::sync::Arc;

use shared_types::{AdvanceRequest, FinishStatus, RequestKind, RollupRequest};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::DappConfig;
use crate::domain::{LoopStats, UnknownRequestPolicy};
use crate::error::{AdvanceError, AdvanceResult, RollupResult};
use crate::ports::inbound::{AdvanceApi, AdvanceOutcome};
use crate::ports::outbound::{FinishOutcome, RollupServer};
use crate::service::advance::AdvanceHandler;

/// Drives the rollup protocol.
pub struct ProtocolLoop<R: RollupServer> {
    config: DappConfig,
    rollup: Arc<R>,
    advance: AdvanceHandler<R>,
}

impl<R: RollupServer> ProtocolLoop<R> {
    pub fn new(config: DappConfig, rollup: Arc<R>) -> Self {
        let advance = AdvanceHandler::new(Arc::clone(&rollup));
        Self {
            config,
            rollup,
            advance,
        }
    }

    /// Run until `stop` turns `true` or `max_cycles` finish calls were made.
    ///
    /// Returns an error only for transport or protocol failures of the
    /// finish call; the caller is expected to terminate on it.
    pub async fn run(&self, mut stop: watch::Receiver<bool>) -> RollupResult<LoopStats> {
        let mut stats = LoopStats::default();
        let mut status = FinishStatus::Accept;

        info!(
            rollup_url = %self.config.rollup_url,
            unknown_request_policy = %self.config.unknown_request_policy,
            "Protocol loop started"
        );

        loop {
            if *stop.borrow() {
                info!("Stop requested, leaving protocol loop");
                break;
            }
            if self
                .config
                .max_cycles
                .is_some_and(|max| stats.cycles >= max)
            {
                info!(cycles = stats.cycles, "Cycle limit reached, leaving protocol loop");
                break;
            }

            stats.cycles += 1;
            info!(status = %status, cycle = stats.cycles, "Sending finish");

            let outcome = tokio::select! {
                biased;
                _ = stop_requested(&mut stop) => {
                    info!("Stop requested while waiting for a request, leaving protocol loop");
                    break;
                }
                outcome = self.rollup.finish(status) => outcome?,
            };

            // The announced status is consumed; start the new cycle clean.
            status = FinishStatus::Accept;

            match outcome {
                FinishOutcome::Idle => {
                    stats.idle += 1;
                    info!("No pending rollup request, trying again");
                    if !self.config.idle_backoff.is_zero() {
                        tokio::select! {
                            biased;
                            _ = stop_requested(&mut stop) => {}
                            _ = tokio::time::sleep(self.config.idle_backoff) => {}
                        }
                    }
                }
                FinishOutcome::Request(request) => match self.dispatch(&request).await {
                    Ok(outcome) => {
                        stats.accepted += 1;
                        if outcome.notice_sent() {
                            stats.notices += 1;
                        }
                    }
                    Err(err) => {
                        error!(
                            error = %err,
                            kind = ?err.kind(),
                            request_type = %request.request_type,
                            "Request handling failed"
                        );
                        stats.rejected += 1;
                        status = FinishStatus::Reject;
                    }
                },
            }

            debug!(?stats, "Cycle complete");
        }

        info!(
            cycles = stats.cycles,
            accepted = stats.accepted,
            rejected = stats.rejected,
            notices = stats.notices,
            "Protocol loop stopped"
        );
        Ok(stats)
    }

    /// Route a request to its handler.
    pub async fn dispatch(&self, request: &RollupRequest) -> AdvanceResult<AdvanceOutcome> {
        match request.kind() {
            RequestKind::Advance => self.handle_as_advance(request).await,
            kind @ (RequestKind::Inspect | RequestKind::Unknown(_)) => {
                match self.config.unknown_request_policy {
                    UnknownRequestPolicy::TreatAsAdvance => {
                        warn!(kind = %kind, "Non-advance request routed to the advance handler");
                        self.handle_as_advance(request).await
                    }
                    UnknownRequestPolicy::Reject => Err(AdvanceError::UnsupportedRequest {
                        request_type: request.request_type.clone(),
                    }),
                }
            }
        }
    }

    async fn handle_as_advance(&self, request: &RollupRequest) -> AdvanceResult<AdvanceOutcome> {
        let advance: AdvanceRequest = serde_json::from_value(request.data.clone())
            .map_err(|e| AdvanceError::Envelope(e.to_string()))?;
        self.advance.handle_advance(&advance).await
    }
}

/// Resolve once `stop` holds `true`. Never resolves if the sender is gone.
async fn stop_requested(stop: &mut watch::Receiver<bool>) {
    loop {
        if *stop.borrow_and_update() {
            return;
        }
        if stop.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
