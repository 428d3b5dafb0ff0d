// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end present / clean-up flows against a mocked Hetzner DNS API.

mod common;

use common::{hetzner_client, mount_zone, records_body};
use hetzner_acme_dns::dns_errors::{RecordError, SolverError, ZoneError};
use hetzner_acme_dns::solver::{ChallengeRecordManager, ChallengeRequest, FailurePolicy};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn challenge(fqdn: &str, zone: &str) -> ChallengeRequest {
    ChallengeRequest {
        resolved_fqdn: fqdn.to_string(),
        resolved_zone: zone.to_string(),
        key: "LPsIwTo7o8BoG0-vjCyGQGBWSVIPxI-i_X336eUOQZo".to_string(),
    }
}

async fn mount_create(server: &MockServer, zone_id: &str, name: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path("/records"))
        .and(body_json(json!({
            "value": "LPsIwTo7o8BoG0-vjCyGQGBWSVIPxI-i_X336eUOQZo",
            "ttl": 120,
            "type": "TXT",
            "name": name,
            "zone_id": zone_id
        })))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "record": {"type": "TXT", "id": "rec-created", "zone_id": zone_id, "name": name, "value": "v", "ttl": 120}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn present_searches_parent_zones() {
    let server = MockServer::start().await;
    mount_zone(&server, "_acme-challenge.www.example.com", &[]).await;
    mount_zone(&server, "www.example.com", &[]).await;
    mount_zone(&server, "example.com", &[("zone-1", "example.com")]).await;
    mount_create(&server, "zone-1", "_acme-challenge.www", 200).await;

    let manager = ChallengeRecordManager::new(hetzner_client(&server));
    let outcome = manager
        .present(&challenge(
            "_acme-challenge.www.example.com.",
            "_acme-challenge.www.example.com.",
        ))
        .await
        .unwrap();

    assert_eq!(outcome.zone.name.as_str(), "example.com");
    assert_eq!(outcome.zone.id, "zone-1");
    assert_eq!(outcome.record_name, "_acme-challenge.www");
    assert_eq!(outcome.record_id.as_deref(), Some("rec-created"));
}

#[tokio::test]
async fn present_continues_past_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("name", "www.example.com"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    mount_zone(&server, "example.com", &[("zone-1", "example.com")]).await;
    mount_create(&server, "zone-1", "_acme-challenge.www", 200).await;

    let manager = ChallengeRecordManager::new(hetzner_client(&server));
    let outcome = manager
        .present(&challenge("_acme-challenge.www.example.com.", "www.example.com."))
        .await
        .unwrap();

    assert_eq!(outcome.zone.id, "zone-1");
}

#[tokio::test]
async fn present_at_zone_apex() {
    let server = MockServer::start().await;
    mount_zone(&server, "example.com", &[("zone-1", "example.com")]).await;
    mount_create(&server, "zone-1", "@", 200).await;

    let manager = ChallengeRecordManager::new(hetzner_client(&server));
    let outcome = manager
        .present(&challenge("example.com.", "example.com."))
        .await
        .unwrap();

    assert_eq!(outcome.record_name, "@");
}

#[tokio::test]
async fn present_with_configured_zone_skips_search() {
    let server = MockServer::start().await;
    mount_zone(&server, "example.com", &[("zone-1", "example.com")]).await;
    mount_create(&server, "zone-1", "_acme-challenge.deep.www", 200).await;

    let manager = ChallengeRecordManager::new(hetzner_client(&server)).with_zone_name("example.com");
    manager
        .present(&challenge(
            "_acme-challenge.deep.www.example.com.",
            "deep.www.example.com.",
        ))
        .await
        .unwrap();

    let zone_queries = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == "/zones")
        .count();
    assert_eq!(zone_queries, 1);
}

#[tokio::test]
async fn present_without_registered_zone_creates_nothing() {
    let server = MockServer::start().await;
    mount_zone(&server, "www.example.com", &[]).await;
    mount_zone(&server, "example.com", &[]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let manager = ChallengeRecordManager::new(hetzner_client(&server));
    let err = manager
        .present(&challenge("_acme-challenge.www.example.com.", "www.example.com."))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SolverError::Zone(ZoneError::NotFound {
            domain: "www.example.com.".to_string()
        })
    );
}

#[tokio::test]
async fn present_create_failure_depends_on_policy() {
    let server = MockServer::start().await;
    mount_zone(&server, "example.com", &[("zone-1", "example.com")]).await;
    Mock::given(method("POST"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let request = challenge("_acme-challenge.example.com.", "example.com.");

    let lenient = ChallengeRecordManager::new(hetzner_client(&server));
    let outcome = lenient.present(&request).await.unwrap();
    assert_eq!(outcome.record_id, None);

    let strict =
        ChallengeRecordManager::new(hetzner_client(&server)).with_policy(FailurePolicy::Strict);
    let err = strict.present(&request).await.unwrap_err();
    assert!(matches!(
        err,
        SolverError::Record(RecordError::CreateFailed { .. })
    ));
    assert!(err.is_transient());
}

#[tokio::test]
async fn clean_up_deletes_last_matching_record() {
    let server = MockServer::start().await;
    mount_zone(&server, "www.example.com", &[]).await;
    mount_zone(&server, "example.com", &[("zone-1", "example.com")]).await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("zone_id", "zone-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(
            "zone-1",
            &[
                ("rec-1", "_acme-challenge.www"),
                ("rec-2", "www"),
                ("rec-3", "_ACME-Challenge.WWW"),
            ],
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/records/rec-3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let manager = ChallengeRecordManager::new(hetzner_client(&server));
    let outcome = manager
        .clean_up(&challenge("_acme-challenge.www.example.com.", "www.example.com."))
        .await
        .unwrap();

    assert_eq!(outcome.record_id, "rec-3");
    assert!(outcome.deleted);
}

#[tokio::test]
async fn clean_up_missing_record() {
    let server = MockServer::start().await;
    mount_zone(&server, "example.com", &[("zone-1", "example.com")]).await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(records_body("zone-1", &[("rec-1", "www")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/records/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let request = challenge("_acme-challenge.example.com.", "example.com.");

    let lenient = ChallengeRecordManager::new(hetzner_client(&server));
    let outcome = lenient.clean_up(&request).await.unwrap();
    assert_eq!(outcome.record_id, "");
    assert!(!outcome.deleted);

    let strict =
        ChallengeRecordManager::new(hetzner_client(&server)).with_policy(FailurePolicy::Strict);
    let err = strict.clean_up(&request).await.unwrap_err();
    assert_eq!(
        err,
        SolverError::Record(RecordError::NotFound {
            name: "_acme-challenge".to_string(),
            zone: "example.com".to_string(),
        })
    );
}
