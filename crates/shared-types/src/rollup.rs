//! # Rollup HTTP Wire Types
//!
//! JSON bodies exchanged with the rollup server.
//!
//! ```text
//! POST /finish  {"status": "accept"|"reject"}
//!      202      (no request pending)
//!      200      {"request_type": "advance_state"|"inspect_state", "data": {...}}
//!
//! POST /notice  {"payload": "0x..."}
//!      200      {"index": 0}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the previous request, announced with the next finish call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishStatus {
    /// The previous request was processed successfully.
    #[default]
    Accept,
    /// The previous request failed and its effects must be discarded.
    Reject,
}

impl FinishStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishStatus::Accept => "accept",
            FinishStatus::Reject => "reject",
        }
    }
}

impl fmt::Display for FinishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /finish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishRequest {
    pub status: FinishStatus,
}

impl FinishRequest {
    pub fn new(status: FinishStatus) -> Self {
        Self { status }
    }
}

/// Request envelope returned by a non-202 finish response.
///
/// `data` is kept as raw JSON; its shape depends on `request_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupRequest {
    pub request_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl RollupRequest {
    /// Classify the request by its type tag.
    pub fn kind(&self) -> RequestKind {
        RequestKind::from(self.request_type.as_str())
    }
}

/// Request kinds known to the rollup protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// `advance_state`: a state-changing input.
    Advance,
    /// `inspect_state`: a read-only query.
    Inspect,
    /// Any other tag.
    Unknown(String),
}

impl RequestKind {
    pub const ADVANCE_STATE: &'static str = "advance_state";
    pub const INSPECT_STATE: &'static str = "inspect_state";
}

impl From<&str> for RequestKind {
    fn from(tag: &str) -> Self {
        match tag {
            Self::ADVANCE_STATE => RequestKind::Advance,
            Self::INSPECT_STATE => RequestKind::Inspect,
            other => RequestKind::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Advance => f.write_str(Self::ADVANCE_STATE),
            RequestKind::Inspect => f.write_str(Self::INSPECT_STATE),
            RequestKind::Unknown(tag) => write!(f, "unknown({tag})"),
        }
    }
}

/// Metadata attached to an advance request by the rollup node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceMetadata {
    #[serde(default)]
    pub msg_sender: String,
    #[serde(default)]
    pub epoch_index: u64,
    #[serde(default)]
    pub input_index: u64,
    #[serde(default)]
    pub block_number: u64,
    #[serde(default)]
    pub timestamp: u64,
}

/// `data` of an `advance_state` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdvanceMetadata>,
    /// Hex-encoded payload.
    pub payload: String,
}

impl AdvanceRequest {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            metadata: None,
            payload: payload.into(),
        }
    }
}

/// Body of `POST /notice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Hex-encoded payload.
    pub payload: String,
}

impl Notice {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Response to an output emission (notice) carrying its index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    pub index: u64,
}
