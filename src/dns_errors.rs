// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for zone resolution, record handling, and Hetzner API calls.
//!
//! This module provides specialized error types for:
//! - Zone resolution (candidate generation, ambiguous matches, unregistered domains)
//! - Challenge record handling (record name derivation, record lookup, create/delete)
//! - Hetzner DNS API calls (connectivity, HTTP status, response decoding)
//! - Solver configuration
//!
//! Every error maps to a stable reason code from [`crate::status_reasons`] so log
//! events can be matched without parsing messages.

use crate::status_reasons::{
    REASON_API_INVALID_RESPONSE, REASON_API_TIMEOUT, REASON_API_UNREACHABLE,
    REASON_INVALID_CONFIG, REASON_NO_ZONE_CANDIDATES, REASON_RECORD_NAME_MISMATCH,
    REASON_RECORD_NOT_FOUND, REASON_ZONE_AMBIGUOUS, REASON_ZONE_NOT_FOUND,
};
use thiserror::Error;

/// Errors that can occur while resolving the zone that owns a challenge domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// The domain has fewer than two labels
    ///
    /// Returned before any API call is made. A bare top-level label such as `com`
    /// can never be a registered zone.
    #[error("unable to determine potential zones from domain '{domain}'")]
    NoCandidates {
        /// The domain as passed to the search
        domain: String,
    },

    /// The provider reported more than one zone for a single name
    ///
    /// Zone names are expected to be unique per account, so this is treated as an
    /// error for that candidate instead of picking one of the matches.
    #[error("unexpected number of zones ({count}) found for name '{zone}'")]
    Ambiguous {
        /// The candidate zone name
        zone: String,
        /// Number of matching zones reported by the provider
        count: usize,
    },

    /// Neither the domain nor any of its parents is a registered zone
    #[error("unable to find a registered Hetzner DNS zone for domain '{domain}' or its parents")]
    NotFound {
        /// The domain as passed to the search
        domain: String,
    },

    /// An explicitly configured zone name is not registered with the provider
    #[error("configured zone '{zone}' is not registered with Hetzner DNS")]
    Unregistered {
        /// The configured zone name
        zone: String,
    },
}

/// Errors related to the challenge TXT record itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The FQDN does not belong to the zone, or trimming the zone left nothing
    #[error("FQDN '{fqdn}' does not yield a record name within zone '{zone}'")]
    NameMismatch {
        /// The challenge FQDN
        fqdn: String,
        /// The resolved zone name
        zone: String,
    },

    /// No record with the derived name exists in the zone
    #[error("no record named '{name}' found in zone '{zone}'")]
    NotFound {
        /// The relative record name
        name: String,
        /// The zone name
        zone: String,
    },

    /// The provider refused to create the record
    #[error("failed to create TXT record '{name}' in zone '{zone}': {source}")]
    CreateFailed {
        /// The relative record name
        name: String,
        /// The zone name
        zone: String,
        /// Underlying API failure
        #[source]
        source: ApiError,
    },

    /// The provider refused to delete the record
    #[error("failed to delete TXT record '{name}' in zone '{zone}': {source}")]
    DeleteFailed {
        /// The relative record name
        name: String,
        /// The zone name
        zone: String,
        /// Underlying API failure
        #[source]
        source: ApiError,
    },
}

/// Errors raised while talking to the Hetzner DNS API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent (DNS failure, connection refused, TLS error)
    #[error("HTTP connection to {url} failed: {reason}")]
    ConnectionFailed {
        /// Request URL
        url: String,
        /// Reason for the connection failure
        reason: String,
    },

    /// The request did not complete within the configured timeout
    #[error("HTTP request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL
        url: String,
        /// Configured timeout in seconds
        timeout_secs: u64,
    },

    /// The API answered with a status other than 200 OK
    #[error("Error calling API status: {status} url: {url} method: {method} ({message})")]
    UnexpectedStatus {
        /// HTTP method
        method: String,
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Reason code derived from the status (see [`crate::http_errors`])
        reason: &'static str,
        /// Human-readable explanation
        message: String,
    },

    /// The API answered 200 OK but the body could not be decoded
    #[error("unable to decode response from {url}: {reason}")]
    InvalidResponse {
        /// Request URL
        url: String,
        /// Decoder error
        reason: String,
    },

    /// A request URL could not be built from the configured base URL
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser error
        reason: String,
    },
}

/// Errors in the solver configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API token is not available
    #[error("Hetzner API key not set; export {var}")]
    MissingApiKey {
        /// Environment variable that should hold the key
        var: String,
    },

    /// The solver configuration JSON could not be decoded
    #[error("error decoding solver config: {reason}")]
    InvalidJson {
        /// Decoder error
        reason: String,
    },

    /// The configuration file could not be read
    #[error("unable to read solver config '{path}': {reason}")]
    ReadFailed {
        /// File path
        path: String,
        /// I/O error
        reason: String,
    },

    /// A numeric setting could not be parsed
    #[error("invalid value '{value}' for {setting}")]
    InvalidValue {
        /// Setting name
        setting: String,
        /// Offending value
        value: String,
    },
}

/// Composite error type for every solver operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Zone resolution error
    #[error(transparent)]
    Zone(#[from] ZoneError),

    /// Challenge record error
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Hetzner API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns the reason code for this error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ConnectionFailed { .. } | Self::InvalidUrl { .. } => REASON_API_UNREACHABLE,
            Self::Timeout { .. } => REASON_API_TIMEOUT,
            Self::UnexpectedStatus { reason, .. } => *reason,
            Self::InvalidResponse { .. } => REASON_API_INVALID_RESPONSE,
        }
    }

    /// Returns true if retrying the same call later could succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } | Self::Timeout { .. } => true,
            Self::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse { .. } | Self::InvalidUrl { .. } => false,
        }
    }
}

impl SolverError {
    /// Returns true if this error is transient and the operation could be retried.
    ///
    /// Only API failures can be transient. Resolution and configuration errors
    /// describe the state of the account or the input and do not heal on retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Api(e)
            | Self::Record(
                RecordError::CreateFailed { source: e, .. }
                | RecordError::DeleteFailed { source: e, .. },
            ) => e.is_transient(),
            Self::Zone(_)
            | Self::Record(RecordError::NameMismatch { .. } | RecordError::NotFound { .. })
            | Self::Config(_) => false,
        }
    }

    /// Returns the reason code for this error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Zone(ZoneError::NoCandidates { .. }) => REASON_NO_ZONE_CANDIDATES,
            Self::Zone(ZoneError::Ambiguous { .. }) => REASON_ZONE_AMBIGUOUS,
            Self::Zone(ZoneError::NotFound { .. } | ZoneError::Unregistered { .. }) => {
                REASON_ZONE_NOT_FOUND
            }

            Self::Record(RecordError::NameMismatch { .. }) => REASON_RECORD_NAME_MISMATCH,
            Self::Record(RecordError::NotFound { .. }) => REASON_RECORD_NOT_FOUND,
            Self::Record(
                RecordError::CreateFailed { source, .. } | RecordError::DeleteFailed { source, .. },
            ) => source.reason(),

            Self::Api(e) => e.reason(),
            Self::Config(_) => REASON_INVALID_CONFIG,
        }
    }
}

#[cfg(test)]
#[path = "dns_errors_tests.rs"]
mod dns_errors_tests;
