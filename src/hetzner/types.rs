// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Wire types for the Hetzner DNS API.
//!
//! Only the fields the solver reads are required. Everything else the API
//! returns is decoded leniently with defaults so that new or missing fields do
//! not break zone and record lookups.

use crate::solver::{NewRecord, RecordSummary, ZoneList, ZoneSummary};
use serde::{Deserialize, Serialize};

/// Response body of `GET /zones`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneResponse {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub meta: Meta,
}

/// Response body of `GET /records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResponse {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub meta: Meta,
}

/// Response body of `POST /records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEnvelope {
    pub record: Record,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub total_entries: usize,
}

/// A DNS zone as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub ns: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub records_count: u32,
    #[serde(default)]
    pub is_secondary_dns: bool,
    #[serde(default)]
    pub paused: bool,
}

/// A DNS record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type", default)]
    pub record_type: String,
    pub id: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub zone_id: String,
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub ttl: u32,
}

/// Request body of `POST /records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub value: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub zone_id: String,
}

impl From<&NewRecord> for CreateRecordRequest {
    fn from(record: &NewRecord) -> Self {
        Self {
            value: record.value.clone(),
            ttl: record.ttl,
            record_type: record.record_type.clone(),
            name: record.name.clone(),
            zone_id: record.zone_id.clone(),
        }
    }
}

impl From<ZoneResponse> for ZoneList {
    fn from(response: ZoneResponse) -> Self {
        Self {
            total_entries: response.meta.pagination.total_entries,
            zones: response
                .zones
                .into_iter()
                .map(|zone| ZoneSummary {
                    id: zone.id,
                    name: zone.name,
                })
                .collect(),
        }
    }
}

impl From<Record> for RecordSummary {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            value: record.value,
            ttl: record.ttl,
            record_type: record.record_type,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
