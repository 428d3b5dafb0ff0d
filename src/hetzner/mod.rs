// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Hetzner DNS API client.
//!
//! [`HetznerClient`] implements [`DnsApi`] against the Hetzner DNS REST API:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list_zones` | `GET {api_url}/zones?name={name}` |
//! | `list_records` | `GET {api_url}/records?zone_id={zone_id}` |
//! | `create_record` | `POST {api_url}/records` |
//! | `delete_record` | `DELETE {api_url}/records/{record_id}` |
//!
//! Every request carries `Authorization: Bearer {api_key}` and
//! `Content-Type: application/json`. Requests are not retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use hetzner_acme_dns::config::{ProviderSettings, SolverConfig};
//! use hetzner_acme_dns::hetzner::HetznerClient;
//! use hetzner_acme_dns::solver::DnsApi;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = ProviderSettings::from_env(&SolverConfig::default())?;
//! let client = HetznerClient::new(&settings)?;
//! let zones = client.list_zones("example.com").await?;
//! println!("{} zone(s)", zones.zones.len());
//! # Ok(())
//! # }
//! ```

pub(crate) mod api_ops;
pub mod types;

use crate::config::ProviderSettings;
use crate::dns_errors::{ApiError, SolverError};
use crate::solver::{DnsApi, NewRecord, RecordSummary, ZoneList};
use api_ops::Endpoint;
use reqwest::Client as HttpClient;
use std::sync::Arc;

/// Client for the Hetzner DNS API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HetznerClient {
    /// HTTP client for API requests
    client: Arc<HttpClient>,
    /// API token sent as bearer credential
    token: Arc<String>,
    /// API base URL without trailing slash
    base_url: String,
    /// Request timeout, reported in timeout errors
    timeout_secs: u64,
}

impl HetznerClient {
    /// Create a client from provider settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the API URL cannot be parsed and
    /// [`ApiError::ConnectionFailed`] if the HTTP client cannot be built.
    pub fn new(settings: &ProviderSettings) -> Result<Self, SolverError> {
        api_ops::build_api_url(&settings.api_url, &[], &[])?;

        let client = HttpClient::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ApiError::ConnectionFailed {
                url: settings.api_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client: Arc::new(client),
            token: Arc::new(settings.api_key.clone()),
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            timeout_secs: settings.timeout.as_secs(),
        })
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> Endpoint<'_> {
        Endpoint {
            client: &self.client,
            token: &self.token,
            base_url: &self.base_url,
            timeout_secs: self.timeout_secs,
        }
    }
}

impl std::fmt::Debug for HetznerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HetznerClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl DnsApi for HetznerClient {
    async fn list_zones(&self, name: &str) -> Result<ZoneList, ApiError> {
        api_ops::list_zones(self.endpoint(), name).await
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<RecordSummary>, ApiError> {
        api_ops::list_records(self.endpoint(), zone_id).await
    }

    async fn create_record(&self, record: &NewRecord) -> Result<String, ApiError> {
        api_ops::create_record(self.endpoint(), record).await
    }

    async fn delete_record(&self, record_id: &str) -> Result<(), ApiError> {
        api_ops::delete_record(self.endpoint(), record_id).await
    }
}
