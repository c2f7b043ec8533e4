//! Driven Ports (SPI - Outbound Dependencies)

use async_trait::async_trait;
use shared_types::{FinishStatus, IndexResponse, Notice, RollupRequest};

use crate::error::RollupResult;

/// Response to a finish announcement.
#[derive(Debug, Clone, PartialEq)]
pub enum FinishOutcome {
    /// No request pending (HTTP 202).
    Idle,
    /// The next request to process.
    Request(RollupRequest),
}

/// The rollup server's HTTP API.
#[async_trait]
pub trait RollupServer: Send + Sync {
    /// Announce the outcome of the previous request and fetch the next one.
    ///
    /// Errors are protocol or transport failures and are fatal to the loop.
    async fn finish(&self, status: FinishStatus) -> RollupResult<FinishOutcome>;

    /// Emit a notice.
    async fn send_notice(&self, notice: Notice) -> RollupResult<IndexResponse>;
}
