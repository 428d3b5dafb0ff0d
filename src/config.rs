// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Solver configuration.
//!
//! Two layers make up the configuration:
//!
//! - [`SolverConfig`] - the per-issuer JSON block cert-manager hands to a webhook
//!   solver (`secretName`, `zoneName`, `apiUrl`, `strict`)
//! - [`ProviderSettings`] - what the Hetzner client needs to talk to the API,
//!   merged from the solver config and the process environment
//!
//! # Example
//!
//! ```rust
//! use hetzner_acme_dns::config::SolverConfig;
//!
//! let config = SolverConfig::from_json(r#"{"secretName":"hetzner-secret","zoneName":"example.com"}"#)
//!     .unwrap();
//! assert_eq!(config.zone_name(), Some("example.com"));
//! ```

use crate::constants::{
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_API_URL, ENV_API_KEY, ENV_API_TIMEOUT_SECS, ENV_API_URL,
};
use crate::dns_errors::ConfigError;
use crate::solver::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Per-issuer solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Name of the secret holding the API key under `api-key`
    #[serde(rename = "secretName", default, skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<String>,

    /// Zone to use instead of searching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    /// Hetzner API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Return create/delete failures instead of only logging them
    #[serde(default)]
    pub strict: bool,
}

impl SolverConfig {
    /// Decode the solver configuration JSON.
    ///
    /// Empty input and `null` yield the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidJson`] if the input is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson {
            reason: e.to_string(),
        })
    }

    /// Read and decode a solver configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFailed`] if the file cannot be read and
    /// [`ConfigError::InvalidJson`] if it cannot be decoded.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&raw)
    }

    /// The configured zone name, if set and non-empty.
    #[must_use]
    pub fn zone_name(&self) -> Option<&str> {
        self.zone_name.as_deref().filter(|zone| !zone.is_empty())
    }

    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.strict {
            FailurePolicy::Strict
        } else {
            FailurePolicy::BestEffort
        }
    }
}

/// Connection settings for the Hetzner DNS API.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Bearer token
    pub api_key: String,
    /// API base URL without trailing slash
    pub api_url: String,
    /// Timeout for a single HTTP request
    pub timeout: Duration,
}

impl ProviderSettings {
    /// Build settings from the solver config and the process environment.
    ///
    /// # Errors
    ///
    /// See [`ProviderSettings::from_lookup`].
    pub fn from_env(config: &SolverConfig) -> Result<Self, ConfigError> {
        Self::from_lookup(config, |var| std::env::var(var).ok())
    }

    /// Build settings from the solver config and a variable lookup.
    ///
    /// - API key: `HETZNER_API_KEY` (required)
    /// - API URL: `apiUrl` from the solver config, then `HETZNER_API_URL`, then
    ///   the public Hetzner endpoint
    /// - Timeout: `HETZNER_API_TIMEOUT_SECS`, default 30 seconds
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key is set and
    /// [`ConfigError::InvalidValue`] if the timeout is not a positive integer.
    pub fn from_lookup<F>(config: &SolverConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                var: ENV_API_KEY.to_string(),
            })?;

        let api_url = match config.api_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => lookup(ENV_API_URL)
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| {
                    debug!(api_url = DEFAULT_API_URL, "ApiUrl not provided, using default");
                    DEFAULT_API_URL.to_string()
                }),
        };

        let timeout_secs = match lookup(ENV_API_TIMEOUT_SECS) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    setting: ENV_API_TIMEOUT_SECS.to_string(),
                    value,
                })?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
