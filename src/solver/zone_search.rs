// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone discovery by walking up the label hierarchy.
//!
//! Given a domain such as `_acme-challenge.www.example.com`, the search asks a
//! [`ZoneLookup`] about each candidate in turn:
//!
//! 1. `_acme-challenge.www.example.com`
//! 2. `www.example.com`
//! 3. `example.com`
//!
//! The first candidate that resolves wins, so a delegated `www.example.com` zone
//! takes precedence over `example.com`. A failed lookup at one level is recorded
//! and the search moves on to the parent, since the failure is often specific to
//! that level (some providers answer names that were never registered with an
//! error instead of an empty list).
//!
//! The search does not log. Every attempt is returned in the [`ZoneSearchReport`]
//! so the caller decides how to surface it.

use super::zone_resolver::ZoneLookup;
use crate::dns_errors::{SolverError, ZoneError};
use crate::domain::DomainName;

/// What a single candidate lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// The candidate is a registered zone with this identifier
    Found(String),
    /// The provider has no zone by this name
    NotFound,
    /// The lookup failed; the search continued with the parent
    Errored(SolverError),
}

/// One step of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAttempt {
    pub candidate: DomainName,
    pub outcome: CandidateOutcome,
}

/// A zone resolved to its provider identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundZone {
    pub name: DomainName,
    pub id: String,
}

/// Result of a zone search together with every attempt that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSearchReport {
    domain: String,
    attempts: Vec<CandidateAttempt>,
    result: Result<FoundZone, ZoneError>,
}

impl ZoneSearchReport {
    /// The domain exactly as passed to the search.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Attempts in the order they were made.
    #[must_use]
    pub fn attempts(&self) -> &[CandidateAttempt] {
        &self.attempts
    }

    /// The resolved zone, if any.
    #[must_use]
    pub fn zone(&self) -> Option<&FoundZone> {
        self.result.as_ref().ok()
    }

    /// Borrow the outcome of the search.
    ///
    /// # Errors
    ///
    /// Returns the terminal [`ZoneError`] if no zone was found.
    pub fn result(&self) -> Result<&FoundZone, &ZoneError> {
        self.result.as_ref()
    }

    /// Consume the report and keep only the outcome.
    ///
    /// # Errors
    ///
    /// - [`ZoneError::NoCandidates`] if the domain has fewer than two labels
    /// - [`ZoneError::NotFound`] if no candidate resolved
    pub fn into_result(self) -> Result<FoundZone, ZoneError> {
        self.result
    }
}

/// Find the most specific registered zone that owns `domain`.
///
/// `domain` may carry a trailing dot. If it has fewer than two labels the search
/// fails with [`ZoneError::NoCandidates`] without calling `lookup`. Candidates are
/// queried one at a time, most specific first; a lookup error is recorded as
/// [`CandidateOutcome::Errored`] and never aborts the search. When every candidate
/// is exhausted the result is [`ZoneError::NotFound`] naming `domain`.
pub async fn search_zone_name<L: ZoneLookup + ?Sized>(domain: &str, lookup: &L) -> ZoneSearchReport {
    let name = DomainName::new(domain);
    let mut attempts = Vec::new();

    if !name.has_zone_candidates() {
        return ZoneSearchReport {
            domain: domain.to_string(),
            attempts,
            result: Err(ZoneError::NoCandidates {
                domain: domain.to_string(),
            }),
        };
    }

    for candidate in name.candidates() {
        let outcome = match lookup.zone_id(candidate).await {
            Ok(Some(id)) if !id.is_empty() => CandidateOutcome::Found(id),
            Ok(_) => CandidateOutcome::NotFound,
            Err(e) => CandidateOutcome::Errored(e),
        };

        let found = match &outcome {
            CandidateOutcome::Found(id) => Some(FoundZone {
                name: DomainName::new(candidate),
                id: id.clone(),
            }),
            _ => None,
        };

        attempts.push(CandidateAttempt {
            candidate: DomainName::new(candidate),
            outcome,
        });

        if let Some(zone) = found {
            return ZoneSearchReport {
                domain: domain.to_string(),
                attempts,
                result: Ok(zone),
            };
        }
    }

    ZoneSearchReport {
        domain: domain.to_string(),
        attempts,
        result: Err(ZoneError::NotFound {
            domain: domain.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "zone_search_tests.rs"]
mod zone_search_tests;
