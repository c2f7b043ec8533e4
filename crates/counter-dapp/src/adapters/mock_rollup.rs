//! In-memory rollup server for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared_types::{FinishStatus, IndexResponse, Notice, RollupRequest};

use crate::error::{RollupError, RollupResult};
use crate::ports::outbound::{FinishOutcome, RollupServer};

/// Scripted rollup server.
///
/// Finish calls pop scripted responses in order and answer `Idle` once the
/// script is exhausted. Every announced status and every notice is recorded.
#[derive(Default)]
pub struct MockRollupServer {
    script: Mutex<VecDeque<RollupResult<FinishOutcome>>>,
    finishes: RwLock<Vec<FinishStatus>>,
    notices: RwLock<Vec<Notice>>,
    notice_failure: RwLock<Option<RollupError>>,
    next_index: AtomicU64,
}

impl MockRollupServer {
    /// Create a new mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request to be returned by a finish call.
    pub fn push_request(&self, request: RollupRequest) {
        self.script.lock().push_back(Ok(FinishOutcome::Request(request)));
    }

    /// Queue a "no request pending" answer.
    pub fn push_idle(&self) {
        self.script.lock().push_back(Ok(FinishOutcome::Idle));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: RollupError) {
        self.script.lock().push_back(Err(error));
    }

    /// Make every subsequent notice fail with `error` (or succeed again
    /// with `None`).
    pub fn set_notice_failure(&self, error: Option<RollupError>) {
        *self.notice_failure.write() = error;
    }

    /// Statuses announced so far, in order.
    pub fn finishes(&self) -> Vec<FinishStatus> {
        self.finishes.read().clone()
    }

    /// Notices accepted so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.read().clone()
    }
}

#[async_trait]
impl RollupServer for MockRollupServer {
    async fn finish(&self, status: FinishStatus) -> RollupResult<FinishOutcome> {
        self.finishes.write().push(status);
        self.script
            .lock()
            .pop_front()
            .unwrap_or(Ok(FinishOutcome::Idle))
    }

    async fn send_notice(&self, notice: Notice) -> RollupResult<IndexResponse> {
        if let Some(error) = self.notice_failure.read().clone() {
            return Err(error);
        }

        self.notices.write().push(notice);
        Ok(IndexResponse {
            index: self.next_index.fetch_add(1, Ordering::Relaxed),
        })
    }
}
