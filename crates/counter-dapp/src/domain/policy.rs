//! Dispatch policy for request kinds other than `advance_state`.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// What the loop does with a request that is not `advance_state`
/// (`inspect_state` or an unrecognized tag).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownRequestPolicy {
    /// Decode the request data as an advance request and run the advance
    /// handler on it.
    #[default]
    TreatAsAdvance,
    /// Fail the request; the next finish announces `reject`.
    Reject,
}

impl UnknownRequestPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownRequestPolicy::TreatAsAdvance => "advance",
            UnknownRequestPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for UnknownRequestPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownRequestPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "advance" | "treat-as-advance" => Ok(UnknownRequestPolicy::TreatAsAdvance),
            "reject" => Ok(UnknownRequestPolicy::Reject),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}
