// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory `DnsApi` used by the solver unit tests.

use super::api::{DnsApi, NewRecord, RecordSummary, ZoneList, ZoneSummary};
use crate::dns_errors::ApiError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Provider calls observed by [`MockDnsApi`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListZones(String),
    ListRecords(String),
    CreateRecord(NewRecord),
    DeleteRecord(String),
}

/// Scripted provider: zones, records, and injected failures.
#[derive(Default)]
pub struct MockDnsApi {
    zones: HashMap<String, Vec<String>>,
    zone_errors: HashMap<String, ApiError>,
    records: HashMap<String, Vec<RecordSummary>>,
    list_records_error: Option<ApiError>,
    create_error: Option<ApiError>,
    delete_error: Option<ApiError>,
    calls: Mutex<Vec<Call>>,
}

impl MockDnsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone. Registering the same name twice makes it ambiguous.
    pub fn with_zone(mut self, name: &str, id: &str) -> Self {
        self.zones
            .entry(name.to_string())
            .or_default()
            .push(id.to_string());
        self
    }

    pub fn with_zone_error(mut self, name: &str, error: ApiError) -> Self {
        self.zone_errors.insert(name.to_string(), error);
        self
    }

    pub fn with_record(mut self, zone_id: &str, id: &str, name: &str) -> Self {
        self.records
            .entry(zone_id.to_string())
            .or_default()
            .push(RecordSummary {
                id: id.to_string(),
                name: name.to_string(),
                value: "challenge-key".to_string(),
                ttl: 120,
                record_type: "TXT".to_string(),
            });
        self
    }

    pub fn with_list_records_error(mut self, error: ApiError) -> Self {
        self.list_records_error = Some(error);
        self
    }

    pub fn with_create_error(mut self, error: ApiError) -> Self {
        self.create_error = Some(error);
        self
    }

    pub fn with_delete_error(mut self, error: ApiError) -> Self {
        self.delete_error = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn zone_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ListZones(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

/// A 500 response, used as a generic injected failure.
pub fn server_error(url: &str) -> ApiError {
    ApiError::UnexpectedStatus {
        method: "GET".to_string(),
        url: url.to_string(),
        status: 500,
        reason: crate::status_reasons::REASON_API_INTERNAL_ERROR,
        message: "simulated API error".to_string(),
    }
}

#[async_trait::async_trait]
impl DnsApi for MockDnsApi {
    async fn list_zones(&self, name: &str) -> Result<ZoneList, ApiError> {
        self.record(Call::ListZones(name.to_string()));
        if let Some(error) = self.zone_errors.get(name) {
            return Err(error.clone());
        }
        let zones: Vec<ZoneSummary> = self
            .zones
            .get(name)
            .map(|ids| {
                ids.iter()
                    .map(|id| ZoneSummary {
                        id: id.clone(),
                        name: name.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(ZoneList {
            total_entries: zones.len(),
            zones,
        })
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<RecordSummary>, ApiError> {
        self.record(Call::ListRecords(zone_id.to_string()));
        if let Some(error) = &self.list_records_error {
            return Err(error.clone());
        }
        Ok(self.records.get(zone_id).cloned().unwrap_or_default())
    }

    async fn create_record(&self, record: &NewRecord) -> Result<String, ApiError> {
        self.record(Call::CreateRecord(record.clone()));
        match &self.create_error {
            Some(error) => Err(error.clone()),
            None => Ok(format!("rec-{}", record.name)),
        }
    }

    async fn delete_record(&self, record_id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteRecord(record_id.to_string()));
        match &self.delete_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
