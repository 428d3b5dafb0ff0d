// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Challenge record orchestration.
//!
//! [`ChallengeRecordManager`] ties the pieces together for a single challenge:
//!
//! 1. Resolve the zone: the configured zone name if one is set, otherwise a
//!    [`search_zone_name`] starting at the challenge's resolved zone.
//! 2. Derive the record name relative to that zone.
//! 3. Create the TXT record (present) or look it up and delete it (clean-up).
//!
//! # Failure Policy
//!
//! By default ([`FailurePolicy::BestEffort`]) a failed create or delete call is
//! logged and the operation still returns `Ok`; the ACME flow above us times out
//! and retries. Zone resolution failures are always returned, and clean-up also
//! returns record listing failures. [`FailurePolicy::Strict`] additionally returns
//! create and delete failures, refuses an empty record name, and does not issue a
//! delete when no matching record exists.
//!
//! # Example
//!
//! ```rust,no_run
//! use hetzner_acme_dns::config::ProviderSettings;
//! use hetzner_acme_dns::hetzner::HetznerClient;
//! use hetzner_acme_dns::solver::{ChallengeRecordManager, ChallengeRequest};
//!
//! # async fn example(settings: ProviderSettings) -> anyhow::Result<()> {
//! let client = HetznerClient::new(&settings)?;
//! let manager = ChallengeRecordManager::new(client);
//!
//! let challenge = ChallengeRequest {
//!     resolved_fqdn: "_acme-challenge.www.example.com.".to_string(),
//!     resolved_zone: "www.example.com.".to_string(),
//!     key: "LPsIwTo7o8BoG0-vjCyGQGBWSVIPxI-i_X336eUOQZo".to_string(),
//! };
//! manager.present(&challenge).await?;
//! manager.clean_up(&challenge).await?;
//! # Ok(())
//! # }
//! ```

use super::api::{DnsApi, NewRecord, RecordSummary};
use super::record_name::{derive_record_name, try_derive_record_name};
use super::zone_resolver::ZoneResolver;
use super::zone_search::{search_zone_name, CandidateOutcome, FoundZone, ZoneSearchReport};
use crate::constants::SOLVER_NAME;
use crate::dns_errors::{RecordError, SolverError, ZoneError};
use crate::domain::DomainName;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// How create and delete failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log provider failures on create/delete and report success
    #[default]
    BestEffort,
    /// Return every failure to the caller
    Strict,
}

/// The parts of an ACME challenge the solver needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Name the TXT record must be published under, e.g. `_acme-challenge.www.example.com.`
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    /// Zone the ACME client believes owns the FQDN; the zone search starts here
    pub resolved_zone: String,
    /// Challenge key material (the TXT value)
    pub key: String,
}

/// Result of [`ChallengeRecordManager::present`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentOutcome {
    pub zone: FoundZone,
    pub record_name: String,
    /// Identifier of the created record, `None` if the create call failed
    pub record_id: Option<String>,
}

/// Result of [`ChallengeRecordManager::clean_up`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanUpOutcome {
    pub zone: FoundZone,
    pub record_name: String,
    /// Identifier passed to the delete call (empty if no record matched)
    pub record_id: String,
    /// Whether the delete call succeeded
    pub deleted: bool,
}

/// Publishes and removes ACME challenge TXT records.
///
/// Holds no state between calls: every invocation resolves the zone and lists
/// records afresh.
pub struct ChallengeRecordManager<A> {
    api: A,
    zone_name: Option<DomainName>,
    policy: FailurePolicy,
}

impl<A: DnsApi> ChallengeRecordManager<A> {
    /// Create a manager that searches for the zone of every challenge.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            zone_name: None,
            policy: FailurePolicy::default(),
        }
    }

    /// Use `zone_name` instead of searching. An empty name keeps the search.
    #[must_use]
    pub fn with_zone_name(mut self, zone_name: impl AsRef<str>) -> Self {
        let zone_name = zone_name.as_ref();
        self.zone_name = (!zone_name.is_empty()).then(|| DomainName::new(zone_name));
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Solver name as registered with cert-manager.
    #[must_use]
    pub fn name(&self) -> &'static str {
        SOLVER_NAME
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Determine the zone that owns the challenge.
    ///
    /// With a configured zone name, that zone is looked up once. Otherwise the
    /// search starts at the challenge's resolved zone and walks up to its parents.
    ///
    /// # Errors
    ///
    /// - [`ZoneError::Unregistered`] if the configured zone does not exist
    /// - [`ZoneError::NotFound`] / [`ZoneError::NoCandidates`] if the search fails
    /// - Any API or ambiguity error from the configured-zone lookup
    pub async fn resolve_zone(&self, challenge: &ChallengeRequest) -> Result<FoundZone, SolverError> {
        let resolver = ZoneResolver::new(&self.api);

        if let Some(zone_name) = &self.zone_name {
            debug!(zone = %zone_name, "Using configured zone name");
            return match resolver.resolve(zone_name.as_str()).await? {
                Some(id) => Ok(FoundZone {
                    name: zone_name.clone(),
                    id,
                }),
                None => Err(ZoneError::Unregistered {
                    zone: zone_name.to_string(),
                }
                .into()),
            };
        }

        let mut search_domain = challenge.resolved_zone.clone();
        if !search_domain.ends_with('.') {
            search_domain.push('.');
        }
        debug!(domain = %search_domain, "Zone name not configured, searching provider zones");

        let report = search_zone_name(&search_domain, &resolver).await;
        log_search_report(&report);
        let zone = report.into_result()?;
        info!(zone = %zone.name, domain = %search_domain, "Found zone");
        Ok(zone)
    }

    /// Publish the challenge TXT record.
    ///
    /// # Errors
    ///
    /// Returns zone resolution errors before any record is created. Under
    /// [`FailurePolicy::Strict`] also returns [`RecordError::NameMismatch`] and
    /// [`RecordError::CreateFailed`].
    pub async fn present(&self, challenge: &ChallengeRequest) -> Result<PresentOutcome, SolverError> {
        info!(
            fqdn = %challenge.resolved_fqdn,
            zone = %challenge.resolved_zone,
            "Presenting challenge record"
        );

        let zone = self.resolve_zone(challenge).await?;
        let record_name = self.record_name(challenge, &zone)?;
        let record = NewRecord::challenge_txt(&zone.id, &record_name, &challenge.key);

        let record_id = match self.api.create_record(&record).await {
            Ok(id) => {
                info!(
                    fqdn = %challenge.resolved_fqdn,
                    zone = %zone.name,
                    record = %record_name,
                    record_id = %id,
                    "Presented TXT record"
                );
                Some(id)
            }
            Err(e) if self.policy == FailurePolicy::Strict => {
                return Err(RecordError::CreateFailed {
                    name: record_name,
                    zone: zone.name.to_string(),
                    source: e,
                }
                .into());
            }
            Err(e) => {
                error!(
                    fqdn = %challenge.resolved_fqdn,
                    zone = %zone.name,
                    record = %record_name,
                    reason = e.reason(),
                    error = %e,
                    "Failed to create TXT record"
                );
                None
            }
        };

        Ok(PresentOutcome {
            zone,
            record_name,
            record_id,
        })
    }

    /// Remove the challenge TXT record.
    ///
    /// # Errors
    ///
    /// Returns zone resolution and record listing errors. Under
    /// [`FailurePolicy::Strict`] also returns [`RecordError::NameMismatch`],
    /// [`RecordError::NotFound`] and [`RecordError::DeleteFailed`].
    pub async fn clean_up(&self, challenge: &ChallengeRequest) -> Result<CleanUpOutcome, SolverError> {
        info!(
            fqdn = %challenge.resolved_fqdn,
            zone = %challenge.resolved_zone,
            "Cleaning up challenge record"
        );

        let zone = self.resolve_zone(challenge).await?;
        let record_name = self.record_name(challenge, &zone)?;
        let records = self.api.list_records(&zone.id).await?;

        let record_id = match find_record_id(&records, &record_name) {
            Some(id) => id.to_string(),
            None if self.policy == FailurePolicy::Strict => {
                return Err(RecordError::NotFound {
                    name: record_name,
                    zone: zone.name.to_string(),
                }
                .into());
            }
            None => {
                warn!(
                    zone = %zone.name,
                    record = %record_name,
                    "No matching record found, issuing delete without identifier"
                );
                String::new()
            }
        };

        let deleted = match self.api.delete_record(&record_id).await {
            Ok(()) => {
                info!(
                    zone = %zone.name,
                    record = %record_name,
                    record_id = %record_id,
                    "Deleted TXT record"
                );
                true
            }
            Err(e) if self.policy == FailurePolicy::Strict => {
                return Err(RecordError::DeleteFailed {
                    name: record_name,
                    zone: zone.name.to_string(),
                    source: e,
                }
                .into());
            }
            Err(e) => {
                error!(
                    zone = %zone.name,
                    record = %record_name,
                    record_id = %record_id,
                    reason = e.reason(),
                    error = %e,
                    "Failed to delete TXT record"
                );
                false
            }
        };

        Ok(CleanUpOutcome {
            zone,
            record_name,
            record_id,
            deleted,
        })
    }

    fn record_name(&self, challenge: &ChallengeRequest, zone: &FoundZone) -> Result<String, SolverError> {
        match self.policy {
            FailurePolicy::Strict => {
                Ok(try_derive_record_name(&challenge.resolved_fqdn, zone.name.as_str())?)
            }
            FailurePolicy::BestEffort => {
                Ok(derive_record_name(&challenge.resolved_fqdn, zone.name.as_str()))
            }
        }
    }
}

/// Identifier of the last record named `name` (case-insensitive).
#[must_use]
pub fn find_record_id<'a>(records: &'a [RecordSummary], name: &str) -> Option<&'a str> {
    records
        .iter()
        .rev()
        .find(|record| record.name.eq_ignore_ascii_case(name))
        .map(|record| record.id.as_str())
}

/// Emit the attempts of a zone search as log events.
pub fn log_search_report(report: &ZoneSearchReport) {
    for attempt in report.attempts() {
        match &attempt.outcome {
            CandidateOutcome::Found(id) => debug!(
                candidate = %attempt.candidate,
                zone_id = %id,
                "Candidate zone is registered"
            ),
            CandidateOutcome::NotFound => debug!(
                candidate = %attempt.candidate,
                "Zone not found via API, trying parent"
            ),
            CandidateOutcome::Errored(e) => warn!(
                candidate = %attempt.candidate,
                reason = e.reason(),
                error = %e,
                "Error searching for zone ID, trying parent domain"
            ),
        }
    }

    if let Err(e) = report.result() {
        warn!(domain = %report.domain(), error = %e, "Zone search failed");
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
