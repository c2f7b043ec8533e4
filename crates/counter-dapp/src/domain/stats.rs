//! Loop bookkeeping.

/// Counters kept by the protocol loop, returned when it stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Finish announcements sent
    pub cycles: u64,
    /// Finish responses that carried no request (HTTP 202)
    pub idle: u64,
    /// Requests handled successfully
    pub accepted: u64,
    /// Requests whose handling failed
    pub rejected: u64,
    /// Notices emitted
    pub notices: u64,
}

impl LoopStats {
    /// Requests dispatched to a handler.
    pub fn handled(&self) -> u64 {
        self.accepted + self.rejected
    }
}
