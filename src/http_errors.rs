// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP error code mapping to solver failure reasons.
//!
//! This module maps HTTP status codes from the Hetzner DNS API to the stable
//! reason codes in [`crate::status_reasons`], together with a human-readable
//! message. The HTTP adapter attaches both to `ApiError::UnexpectedStatus`.
//!
//! # Usage
//!
//! ```rust
//! use hetzner_acme_dns::http_errors::map_http_error_to_reason;
//!
//! let (reason, message) = map_http_error_to_reason(401);
//! assert_eq!(reason, "ApiAuthFailed");
//! assert!(message.contains("401"));
//! ```

use crate::status_reasons::{
    REASON_API_AUTH_FAILED, REASON_API_BAD_REQUEST, REASON_API_INTERNAL_ERROR,
    REASON_API_NOT_FOUND, REASON_API_RATE_LIMITED, REASON_API_UNREACHABLE, REASON_GATEWAY_ERROR,
};

/// Map HTTP status code to failure reason and message.
///
/// # HTTP Code Mapping
///
/// | HTTP Code | Reason | Meaning |
/// |-----------|--------|---------|
/// | 400, 422 | `ApiBadRequest` | Invalid request or payload |
/// | 401 | `ApiAuthFailed` | Missing or invalid API token |
/// | 403 | `ApiAuthFailed` | Token lacks permission |
/// | 404 | `ApiNotFound` | Zone or record not found |
/// | 429 | `ApiRateLimited` | Rate limit exceeded |
/// | 500 | `ApiInternalError` | Internal server error |
/// | 502, 503, 504 | `GatewayError` | Gateway failure |
/// | Other | `ApiUnreachable` | Unexpected response |
#[must_use]
pub fn map_http_error_to_reason(status_code: u16) -> (&'static str, String) {
    match status_code {
        400 => (
            REASON_API_BAD_REQUEST,
            "Invalid request to Hetzner DNS API (400)".into(),
        ),
        422 => (
            REASON_API_BAD_REQUEST,
            "Hetzner DNS API rejected the payload (422)".into(),
        ),
        401 => (
            REASON_API_AUTH_FAILED,
            "Hetzner DNS API authentication required (401)".into(),
        ),
        403 => (
            REASON_API_AUTH_FAILED,
            "Hetzner DNS API authorization failed (403)".into(),
        ),
        404 => (
            REASON_API_NOT_FOUND,
            "Zone or record not found in Hetzner DNS (404)".into(),
        ),
        429 => (
            REASON_API_RATE_LIMITED,
            "Hetzner DNS API rate limit exceeded (429)".into(),
        ),
        500 => (
            REASON_API_INTERNAL_ERROR,
            "Hetzner DNS API internal error (500)".into(),
        ),
        502 => (
            REASON_GATEWAY_ERROR,
            "Bad gateway reaching Hetzner DNS API (502)".into(),
        ),
        503 => (
            REASON_GATEWAY_ERROR,
            "Hetzner DNS API service unavailable (503)".into(),
        ),
        504 => (
            REASON_GATEWAY_ERROR,
            "Gateway timeout reaching Hetzner DNS API (504)".into(),
        ),
        _ => (
            REASON_API_UNREACHABLE,
            format!("Unexpected HTTP status from Hetzner DNS API ({status_code})"),
        ),
    }
}
