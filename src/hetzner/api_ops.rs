// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone and record HTTP operations against the Hetzner DNS API.
//!
//! Every operation is a single request. Only `200 OK` counts as success; any
//! other status is mapped through [`crate::http_errors`] to an
//! [`ApiError::UnexpectedStatus`].

use super::types::{CreateRecordRequest, RecordEnvelope, RecordResponse, ZoneResponse};
use crate::dns_errors::ApiError;
use crate::http_errors::map_http_error_to_reason;
use crate::solver::{NewRecord, RecordSummary, ZoneList};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, error, warn};
use url::Url;

/// Connection parameters shared by every operation.
#[derive(Clone, Copy)]
pub(crate) struct Endpoint<'a> {
    pub client: &'a HttpClient,
    pub token: &'a str,
    pub base_url: &'a str,
    pub timeout_secs: u64,
}

/// Build a request URL from the API base URL, path segments and query pairs.
///
/// Segments are percent-encoded, so zone names and record identifiers can be
/// passed verbatim.
///
/// # Errors
///
/// Returns [`ApiError::InvalidUrl`] if the base URL cannot be parsed or cannot
/// carry a path.
pub(crate) fn build_api_url(
    base_url: &str,
    segments: &[&str],
    query: &[(&str, &str)],
) -> Result<String, ApiError> {
    let invalid = |reason: String| ApiError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url.into())
}

/// Execute a single request and return the response body.
///
/// # Errors
///
/// - [`ApiError::Timeout`] if the request exceeds the client timeout
/// - [`ApiError::ConnectionFailed`] if the request cannot be sent or the body cannot be read
/// - [`ApiError::UnexpectedStatus`] for any status other than `200 OK`
pub(crate) async fn hetzner_request<T: Serialize + std::fmt::Debug>(
    endpoint: Endpoint<'_>,
    method: Method,
    url: &str,
    body: Option<&T>,
) -> Result<String, ApiError> {
    debug!(method = %method, url = %url, body = ?body, "HTTP API request to Hetzner DNS");

    let start_time = Instant::now();
    let mut request = endpoint
        .client
        .request(method.clone(), url)
        .header("Authorization", format!("Bearer {}", endpoint.token))
        .header("Content-Type", "application/json");

    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                timeout_secs: endpoint.timeout_secs,
            }
        } else {
            ApiError::ConnectionFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    let status = response.status();

    if status != StatusCode::OK {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let (reason, message) = map_http_error_to_reason(status.as_u16());
        error!(
            method = %method,
            url = %url,
            status = %status,
            reason = reason,
            error = %error_text,
            "HTTP API request failed"
        );
        return Err(ApiError::UnexpectedStatus {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            reason,
            message,
        });
    }

    let text = response.text().await.map_err(|e| ApiError::ConnectionFailed {
        url: url.to_string(),
        reason: format!("failed to read response body: {e}"),
    })?;

    debug!(
        method = %method,
        url = %url,
        status = %status,
        response_len = text.len(),
        elapsed_ms = start_time.elapsed().as_millis(),
        "HTTP API request successful"
    );

    Ok(text)
}

fn decode<T: DeserializeOwned>(url: &str, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::InvalidResponse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// `GET /zones?name={name}`
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub(crate) async fn list_zones(endpoint: Endpoint<'_>, name: &str) -> Result<ZoneList, ApiError> {
    let url = build_api_url(endpoint.base_url, &["zones"], &[("name", name)])?;
    let text = hetzner_request(endpoint, Method::GET, &url, None::<&()>).await?;
    let response: ZoneResponse = decode(&url, &text)?;
    Ok(response.into())
}

/// `GET /records?zone_id={zone_id}`
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub(crate) async fn list_records(
    endpoint: Endpoint<'_>,
    zone_id: &str,
) -> Result<Vec<RecordSummary>, ApiError> {
    let url = build_api_url(endpoint.base_url, &["records"], &[("zone_id", zone_id)])?;
    let text = hetzner_request(endpoint, Method::GET, &url, None::<&()>).await?;
    let response: RecordResponse = decode(&url, &text)?;
    Ok(response.records.into_iter().map(RecordSummary::from).collect())
}

/// `POST /records`
///
/// Returns the identifier of the new record. A successful response whose body
/// cannot be decoded yields an empty identifier, since the record exists.
///
/// # Errors
///
/// Returns an error if the request fails.
pub(crate) async fn create_record(
    endpoint: Endpoint<'_>,
    record: &NewRecord,
) -> Result<String, ApiError> {
    let url = build_api_url(endpoint.base_url, &["records"], &[])?;
    let body = CreateRecordRequest::from(record);
    let text = hetzner_request(endpoint, Method::POST, &url, Some(&body)).await?;

    match decode::<RecordEnvelope>(&url, &text) {
        Ok(envelope) => Ok(envelope.record.id),
        Err(e) => {
            warn!(url = %url, error = %e, "Record created but response could not be decoded");
            Ok(String::new())
        }
    }
}

/// `DELETE /records/{record_id}`
///
/// # Errors
///
/// Returns an error if the request fails.
pub(crate) async fn delete_record(endpoint: Endpoint<'_>, record_id: &str) -> Result<(), ApiError> {
    let url = build_api_url(endpoint.base_url, &["records", record_id], &[])?;
    hetzner_request(endpoint, Method::DELETE, &url, None::<&()>).await?;
    Ok(())
}

#[cfg(test)]
#[path = "api_ops_tests.rs"]
mod api_ops_tests;
