// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for Hetzner DNS API URL building and request handling.

#[cfg(test)]
mod tests {
    use crate::dns_errors::ApiError;
    use crate::hetzner::api_ops::{build_api_url, hetzner_request, Endpoint};
    use crate::status_reasons::{REASON_API_AUTH_FAILED, REASON_API_RATE_LIMITED};
    use reqwest::{Client as HttpClient, Method};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint<'a>(client: &'a HttpClient, base_url: &'a str) -> Endpoint<'a> {
        Endpoint {
            client,
            token: "test-token",
            base_url,
            timeout_secs: 30,
        }
    }

    // =====================================================
    // URL Building Tests
    // =====================================================

    #[test]
    fn test_build_api_url_appends_to_versioned_base() {
        let url = build_api_url("https://api.hetzner.cloud/v1", &["zones"], &[]).unwrap();
        assert_eq!(url, "https://api.hetzner.cloud/v1/zones");
    }

    #[test]
    fn test_build_api_url_trailing_slash() {
        let url = build_api_url("https://api.hetzner.cloud/v1/", &["records"], &[]).unwrap();
        assert_eq!(url, "https://api.hetzner.cloud/v1/records");
    }

    #[test]
    fn test_build_api_url_host_only() {
        let url = build_api_url("http://127.0.0.1:8080", &["zones"], &[]).unwrap();
        assert_eq!(url, "http://127.0.0.1:8080/zones");
    }

    #[test]
    fn test_build_api_url_with_query() {
        let url = build_api_url(
            "https://api.hetzner.cloud/v1",
            &["zones"],
            &[("name", "example.com")],
        )
        .unwrap();
        assert_eq!(url, "https://api.hetzner.cloud/v1/zones?name=example.com");
    }

    #[test]
    fn test_build_api_url_encodes_query_values() {
        let url = build_api_url("https://dns.example/v1", &["zones"], &[("name", "a b&c")]).unwrap();
        assert_eq!(url, "https://dns.example/v1/zones?name=a+b%26c");
    }

    #[test]
    fn test_build_api_url_encodes_segments() {
        let url = build_api_url("https://dns.example/v1", &["records", "id/with slash"], &[]).unwrap();
        assert_eq!(url, "https://dns.example/v1/records/id%2Fwith%20slash");
    }

    #[test]
    fn test_build_api_url_empty_segment_keeps_trailing_slash() {
        let url = build_api_url("https://dns.example/v1", &["records", ""], &[]).unwrap();
        assert_eq!(url, "https://dns.example/v1/records/");
    }

    #[test]
    fn test_build_api_url_invalid_base() {
        let err = build_api_url("not a url", &["zones"], &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn test_build_api_url_cannot_be_base() {
        let err = build_api_url("mailto:dns@example.com", &["zones"], &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    // =====================================================
    // Request Handling Tests
    // =====================================================

    #[tokio::test]
    async fn test_request_sends_auth_and_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/records"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"hello": "world"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let base_url = server.uri();
        let url = format!("{base_url}/records");
        let body = json!({"hello": "world"});

        let text = hetzner_request(endpoint(&client, &base_url), Method::POST, &url, Some(&body))
            .await
            .unwrap();

        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_request_non_200_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let base_url = server.uri();
        let url = format!("{base_url}/zones");

        let err = hetzner_request(endpoint(&client, &base_url), Method::GET, &url, None::<&()>)
            .await
            .unwrap_err();

        match &err {
            ApiError::UnexpectedStatus {
                method,
                status,
                reason,
                ..
            } => {
                assert_eq!(method, "GET");
                assert_eq!(*status, 401);
                assert_eq!(*reason, REASON_API_AUTH_FAILED);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err
            .to_string()
            .starts_with(&format!("Error calling API status: 401 url: {url} method: GET")));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_request_other_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let base_url = server.uri();
        let url = format!("{base_url}/records");

        let err = hetzner_request(endpoint(&client, &base_url), Method::POST, &url, None::<&()>)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnexpectedStatus { status: 201, .. }));
    }

    #[tokio::test]
    async fn test_request_rate_limited_is_transient() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let base_url = server.uri();
        let url = format!("{base_url}/zones");

        let err = hetzner_request(endpoint(&client, &base_url), Method::GET, &url, None::<&()>)
            .await
            .unwrap_err();

        assert_eq!(err.reason(), REASON_API_RATE_LIMITED);
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = HttpClient::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let base_url = server.uri();
        let url = format!("{base_url}/zones");

        let err = hetzner_request(endpoint(&client, &base_url), Method::GET, &url, None::<&()>)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Timeout { timeout_secs: 30, .. }));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_request_connection_refused() {
        let client = HttpClient::new();
        let base_url = "http://127.0.0.1:1";
        let url = format!("{base_url}/zones");

        let err = hetzner_request(endpoint(&client, base_url), Method::GET, &url, None::<&()>)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ConnectionFailed { .. }));
    }
}
