// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Provider contract consumed by the solver core.
//!
//! The core never talks HTTP directly. Everything it needs from the DNS provider
//! goes through [`DnsApi`], which [`crate::hetzner::HetznerClient`] implements
//! against the Hetzner DNS API and tests implement in memory.

use crate::constants::{CHALLENGE_RECORD_TTL_SECS, RECORD_TYPE_TXT};
use crate::dns_errors::ApiError;
use std::sync::Arc;

/// A zone as reported by the provider's zone directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSummary {
    /// Opaque provider identifier
    pub id: String,
    /// Zone name, e.g. `example.com`
    pub name: String,
}

/// Result of a zone directory query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoneList {
    /// Zones on the returned page, in provider order
    pub zones: Vec<ZoneSummary>,
    /// Total number of matching zones reported by the provider
    pub total_entries: usize,
}

/// A record as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    /// Opaque provider identifier
    pub id: String,
    /// Name relative to the zone (`@` for the apex)
    pub name: String,
    /// Record value
    pub value: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// Record type, e.g. `TXT`
    pub record_type: String,
}

/// A record to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Identifier of the zone that will own the record
    pub zone_id: String,
    /// Name relative to the zone
    pub name: String,
    /// Record value
    pub value: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// Record type
    pub record_type: String,
}

impl NewRecord {
    /// A challenge TXT record with the fixed challenge TTL.
    #[must_use]
    pub fn challenge_txt(zone_id: &str, name: &str, value: &str) -> Self {
        Self {
            zone_id: zone_id.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            ttl: CHALLENGE_RECORD_TTL_SECS,
            record_type: RECORD_TYPE_TXT.to_string(),
        }
    }
}

/// Zone and record operations offered by a DNS provider.
///
/// Implementations perform one provider round-trip per call and hold no state
/// between calls.
#[async_trait::async_trait]
pub trait DnsApi: Send + Sync {
    /// List zones whose name exactly matches `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or its answer cannot be decoded.
    async fn list_zones(&self, name: &str) -> Result<ZoneList, ApiError>;

    /// List every record in the zone with identifier `zone_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or its answer cannot be decoded.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<RecordSummary>, ApiError>;

    /// Create a record and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the record or cannot be reached.
    async fn create_record(&self, record: &NewRecord) -> Result<String, ApiError>;

    /// Delete the record with identifier `record_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the deletion or cannot be reached.
    async fn delete_record(&self, record_id: &str) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
impl<T: DnsApi + ?Sized> DnsApi for Arc<T> {
    async fn list_zones(&self, name: &str) -> Result<ZoneList, ApiError> {
        (**self).list_zones(name).await
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<RecordSummary>, ApiError> {
        (**self).list_records(zone_id).await
    }

    async fn create_record(&self, record: &NewRecord) -> Result<String, ApiError> {
        (**self).create_record(record).await
    }

    async fn delete_record(&self, record_id: &str) -> Result<(), ApiError> {
        (**self).delete_record(record_id).await
    }
}
