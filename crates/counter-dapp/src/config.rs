//! # Dapp Configuration
//!
//! All knobs default to the plain protocol behavior: immediate re-announce
//! after an idle finish, no cycle limit, no request timeout.

use std::env;
use std::time::Duration;

use crate::domain::UnknownRequestPolicy;
use crate::error::ConfigError;

/// Default rollup server address used by rollup node deployments.
pub const DEFAULT_ROLLUP_URL: &str = "http://127.0.0.1:5004";

/// Runtime configuration of the dapp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DappConfig {
    /// Base URL of the rollup HTTP server.
    pub rollup_url: String,
    /// What to do with requests that are not `advance_state`.
    pub unknown_request_policy: UnknownRequestPolicy,
    /// Pause after a "no request pending" answer.
    pub idle_backoff: Duration,
    /// Stop after this many finish announcements.
    pub max_cycles: Option<u64>,
    /// Per-request HTTP timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for DappConfig {
    fn default() -> Self {
        Self {
            rollup_url: DEFAULT_ROLLUP_URL.to_string(),
            unknown_request_policy: UnknownRequestPolicy::default(),
            idle_backoff: Duration::ZERO,
            max_cycles: None,
            request_timeout: None,
        }
    }
}

impl DappConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ROLLUP_HTTP_SERVER_URL`: Rollup server (default: http://127.0.0.1:5004)
    /// - `DAPP_UNKNOWN_REQUEST_POLICY`: `advance` or `reject` (default: advance)
    /// - `DAPP_IDLE_BACKOFF_MS`: Pause after an idle finish (default: 0)
    /// - `DAPP_MAX_CYCLES`: Stop after N finish calls (default: unbounded)
    /// - `DAPP_REQUEST_TIMEOUT_SECS`: HTTP timeout (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ROLLUP_HTTP_SERVER_URL") {
            config.rollup_url = url;
        }
        if let Some(policy) = lookup("DAPP_UNKNOWN_REQUEST_POLICY") {
            config.unknown_request_policy = policy.parse()?;
        }
        if let Some(ms) = lookup("DAPP_IDLE_BACKOFF_MS") {
            config.idle_backoff = Duration::from_millis(parse_number("DAPP_IDLE_BACKOFF_MS", &ms)?);
        }
        if let Some(cycles) = lookup("DAPP_MAX_CYCLES") {
            config.max_cycles = Some(parse_number("DAPP_MAX_CYCLES", &cycles)?);
        }
        if let Some(secs) = lookup("DAPP_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Some(Duration::from_secs(parse_number(
                "DAPP_REQUEST_TIMEOUT_SECS",
                &secs,
            )?));
        }

        Ok(config)
    }

    /// Check the configuration before starting the loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.rollup_url.trim();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());

        if !has_host {
            return Err(ConfigError::InvalidRollupUrl(self.rollup_url.clone()));
        }
        Ok(())
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DappConfig::default();
        assert_eq!(config.rollup_url, DEFAULT_ROLLUP_URL);
        assert_eq!(config.idle_backoff, Duration::ZERO);
        assert_eq!(config.max_cycles, None);
        assert_eq!(config.request_timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = DappConfig::from_lookup(lookup(&[
            ("ROLLUP_HTTP_SERVER_URL", "http://rollup:5004"),
            ("DAPP_UNKNOWN_REQUEST_POLICY", "reject"),
            ("DAPP_IDLE_BACKOFF_MS", "250"),
            ("DAPP_MAX_CYCLES", "10"),
            ("DAPP_REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.rollup_url, "http://rollup:5004");
        assert_eq!(config.unknown_request_policy, UnknownRequestPolicy::Reject);
        assert_eq!(config.idle_backoff, Duration::from_millis(250));
        assert_eq!(config.max_cycles, Some(10));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_lookup_rejects_bad_numbers() {
        let err = DappConfig::from_lookup(lookup(&[("DAPP_MAX_CYCLES", "many")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "DAPP_MAX_CYCLES",
                value: "many".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        for url in ["", "rollup:5004", "http://", "ftp://rollup"] {
            let config = DappConfig {
                rollup_url: url.to_string(),
                ..DappConfig::default()
            };
            assert!(config.validate().is_err(), "{url}");
        }
    }
}
