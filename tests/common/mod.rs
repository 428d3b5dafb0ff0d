// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

use hetzner_acme_dns::config::ProviderSettings;
use hetzner_acme_dns::hetzner::HetznerClient;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "integration-token";

/// Client pointed at a mock Hetzner DNS API.
pub fn hetzner_client(server: &MockServer) -> HetznerClient {
    let settings = ProviderSettings {
        api_key: TEST_TOKEN.to_string(),
        api_url: server.uri(),
        timeout: Duration::from_secs(5),
    };
    HetznerClient::new(&settings).expect("client should build")
}

/// `GET /zones?name=<name>` response listing the given zones.
pub fn zones_body(zones: &[(&str, &str)]) -> Value {
    let zones: Vec<Value> = zones
        .iter()
        .map(|(id, name)| json!({"id": id, "name": name, "ttl": 86400}))
        .collect();
    json!({
        "zones": zones,
        "meta": {"pagination": {"page": 1, "per_page": 100, "last_page": 1, "total_entries": zones.len()}}
    })
}

/// `GET /records?zone_id=<id>` response listing `(id, name)` TXT records.
pub fn records_body(zone_id: &str, records: &[(&str, &str)]) -> Value {
    let records: Vec<Value> = records
        .iter()
        .map(|(id, name)| {
            json!({"type": "TXT", "id": id, "zone_id": zone_id, "name": name, "value": "v", "ttl": 120})
        })
        .collect();
    json!({"records": records})
}

/// Answer a zone lookup for `name` with the given zones.
pub async fn mount_zone(server: &MockServer, name: &str, zones: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("name", name))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(zones_body(zones)))
        .mount(server)
        .await;
}
