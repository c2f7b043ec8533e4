//! Error types for the counter dapp

use std::fmt;

use shared_types::CodecError;
use thiserror::Error;

/// Errors talking to the rollup server.
///
/// When raised by the finish call these are fatal: the loop stops and the
/// process exits.
#[derive(Debug, Clone, Error)]
pub enum RollupError {
    /// The rollup server could not be reached
    #[error("Cannot connect to rollup server at {url}: {reason}")]
    Connection { url: String, reason: String },

    /// Request or body transfer failed
    #[error("HTTP request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    /// Server answered with a status the protocol does not allow
    #[error("Rollup server returned HTTP {status} for /{endpoint}: {body}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body could not be deserialized
    #[error("Invalid response body from /{endpoint}: {reason}")]
    InvalidBody { endpoint: String, reason: String },
}

/// Result type for rollup server calls
pub type RollupResult<T> = Result<T, RollupError>;

/// Direction in which an incremented counter left the 256-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterBound {
    /// Result is negative
    Underflow,
    /// Result does not fit in 256 bits
    Overflow,
}

impl fmt::Display for CounterBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterBound::Underflow => f.write_str("below zero"),
            CounterBound::Overflow => f.write_str("above 2^256 - 1"),
        }
    }
}

/// Failures while handling one request.
///
/// All of these are recoverable: the loop logs them and announces `reject`
/// on the next finish call.
#[derive(Debug, Error)]
pub enum AdvanceError {
    /// Request could not be serialized for the diagnostic log
    #[error("Failed to serialize advance request: {0}")]
    Serialize(String),

    /// `data` of the envelope is not an advance request
    #[error("Request data is not an advance request: {0}")]
    Envelope(String),

    /// Payload is not valid hex or not UTF-8
    #[error("Failed to decode hex payload: {0}")]
    Decode(#[from] CodecError),

    /// Payload text is not a JSON object
    #[error("Failed to parse payload: {0}")]
    Parse(String),

    /// `counter + 1` does not fit an unsigned 256-bit word
    #[error("Counter {counter} out of range: incremented value is {bound}")]
    CounterOutOfRange { counter: String, bound: CounterBound },

    /// The rollup server refused or failed the notice
    #[error("Failed to send notice: {0}")]
    NoticeDelivery(#[source] RollupError),

    /// Request kind refused by the configured policy
    #[error("Unsupported request type '{request_type}'")]
    UnsupportedRequest { request_type: String },
}

/// Coarse classification of [`AdvanceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceErrorKind {
    Serialize,
    Envelope,
    Decode,
    Parse,
    CounterOutOfRange,
    NoticeDelivery,
    UnsupportedRequest,
}

impl AdvanceError {
    pub fn kind(&self) -> AdvanceErrorKind {
        match self {
            AdvanceError::Serialize(_) => AdvanceErrorKind::Serialize,
            AdvanceError::Envelope(_) => AdvanceErrorKind::Envelope,
            AdvanceError::Decode(_) => AdvanceErrorKind::Decode,
            AdvanceError::Parse(_) => AdvanceErrorKind::Parse,
            AdvanceError::CounterOutOfRange { .. } => AdvanceErrorKind::CounterOutOfRange,
            AdvanceError::NoticeDelivery(_) => AdvanceErrorKind::NoticeDelivery,
            AdvanceError::UnsupportedRequest { .. } => AdvanceErrorKind::UnsupportedRequest,
        }
    }
}

/// Result type for request handling
pub type AdvanceResult<T> = Result<T, AdvanceError>;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rollup server URL is missing or not http(s)
    #[error("Invalid rollup server URL '{0}': expected http:// or https://")]
    InvalidRollupUrl(String),

    /// Unknown value for the unknown-request policy
    #[error("Unknown request policy '{0}': expected 'advance' or 'reject'")]
    InvalidPolicy(String),

    /// A numeric setting could not be parsed
    #[error("Invalid value '{value}' for {name}")]
    InvalidNumber { name: &'static str, value: String },
}
