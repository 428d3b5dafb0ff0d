// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Relative record names.
//!
//! Hetzner splits a DNS name into a zone and a record name relative to that zone.
//! Subdomains below the zone are part of the record name:
//!
//! | FQDN | Zone | Record name |
//! |------|------|-------------|
//! | `_acme-challenge.www.example.com.` | `example.com.` | `_acme-challenge.www` |
//! | `_acme-challenge.example.com.` | `example.com.` | `_acme-challenge` |
//! | `example.com.` | `example.com.` | `@` |
//! | `other.org.` | `example.com.` | *(none)* |

use crate::constants::ZONE_APEX_RECORD_NAME;
use crate::dns_errors::RecordError;
use crate::domain::DomainName;
use tracing::{debug, error};

/// Compute the name of `fqdn` relative to `zone`.
///
/// Both inputs may carry a trailing dot. The zone apex maps to `@`.
///
/// # Errors
///
/// Returns [`RecordError::NameMismatch`] if `fqdn` is not inside `zone`.
pub fn try_derive_record_name(fqdn: &str, zone: &str) -> Result<String, RecordError> {
    let fqdn_name = DomainName::new(fqdn);
    let zone_name = DomainName::new(zone);

    if fqdn_name == zone_name {
        return Ok(ZONE_APEX_RECORD_NAME.to_string());
    }

    fqdn_name
        .as_str()
        .strip_suffix(zone_name.as_str())
        .and_then(|prefix| prefix.strip_suffix('.'))
        .filter(|record| !record.is_empty())
        .map(str::to_string)
        .ok_or_else(|| RecordError::NameMismatch {
            fqdn: fqdn.to_string(),
            zone: zone.to_string(),
        })
}

/// Compute the name of `fqdn` relative to `zone`, or an empty string.
///
/// Lenient form of [`try_derive_record_name`]: a mismatch is logged and signalled
/// by returning `""`. Callers must treat an empty name as a failure.
#[must_use]
pub fn derive_record_name(fqdn: &str, zone: &str) -> String {
    match try_derive_record_name(fqdn, zone) {
        Ok(record) => {
            debug!(fqdn = %fqdn, zone = %zone, record = %record, "Derived record name");
            record
        }
        Err(e) => {
            error!(fqdn = %fqdn, zone = %zone, error = %e, "Unable to derive record name");
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "record_name_tests.rs"]
mod record_name_tests;
