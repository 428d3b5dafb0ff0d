// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Stable reason codes for solver failures.
//!
//! Reasons are programmatic identifiers in CamelCase that explain why a challenge
//! operation failed. They are attached to every error via `SolverError::reason()`
//! and emitted as the `reason` field in log events, so log queries and alerting
//! rules can match on them without parsing messages.

// ============================================================================
// Zone Resolution Reasons
// ============================================================================

/// The domain has fewer than two labels, so no zone candidate can be formed.
pub const REASON_NO_ZONE_CANDIDATES: &str = "NoZoneCandidates";

/// More than one provider zone matched a candidate name.
pub const REASON_ZONE_AMBIGUOUS: &str = "ZoneAmbiguous";

/// No candidate zone (the domain or any of its parents) is registered.
pub const REASON_ZONE_NOT_FOUND: &str = "ZoneNotFound";

// ============================================================================
// Record Reasons
// ============================================================================

/// The challenge FQDN does not belong to the resolved zone.
pub const REASON_RECORD_NAME_MISMATCH: &str = "RecordNameMismatch";

/// No record with the derived name exists in the zone.
pub const REASON_RECORD_NOT_FOUND: &str = "RecordNotFound";

// ============================================================================
// Hetzner API Reasons
// ============================================================================

/// The API rejected the request as malformed (HTTP 400 / 422).
pub const REASON_API_BAD_REQUEST: &str = "ApiBadRequest";

/// The API token was missing, invalid, or lacks permission (HTTP 401 / 403).
pub const REASON_API_AUTH_FAILED: &str = "ApiAuthFailed";

/// The requested resource does not exist (HTTP 404).
pub const REASON_API_NOT_FOUND: &str = "ApiNotFound";

/// The API rate limit was hit (HTTP 429).
pub const REASON_API_RATE_LIMITED: &str = "ApiRateLimited";

/// The API failed internally (HTTP 500).
pub const REASON_API_INTERNAL_ERROR: &str = "ApiInternalError";

/// A gateway in front of the API failed (HTTP 502 / 503 / 504).
pub const REASON_GATEWAY_ERROR: &str = "GatewayError";

/// The API could not be reached, or answered with an unmapped status.
pub const REASON_API_UNREACHABLE: &str = "ApiUnreachable";

/// The request did not complete within the configured timeout.
pub const REASON_API_TIMEOUT: &str = "ApiTimeout";

/// The API answered 200 but the body could not be decoded.
pub const REASON_API_INVALID_RESPONSE: &str = "ApiInvalidResponse";

// ============================================================================
// Configuration Reasons
// ============================================================================

/// Solver configuration is missing or malformed.
pub const REASON_INVALID_CONFIG: &str = "InvalidConfig";
