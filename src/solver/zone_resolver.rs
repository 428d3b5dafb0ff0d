// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Single-name zone lookup.

use super::api::DnsApi;
use crate::dns_errors::{ApiError, SolverError, ZoneError};
use crate::domain::DomainName;

/// Looks up the identifier of a zone by exact name.
///
/// [`crate::solver::zone_search::search_zone_name`] is generic over this trait so
/// the search can be driven by the provider or by an in-memory table.
#[async_trait::async_trait]
pub trait ZoneLookup: Send + Sync {
    /// Returns `Ok(Some(id))` if the zone exists and `Ok(None)` if it does not.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself failed. An error never means "not found".
    async fn zone_id(&self, zone_name: &str) -> Result<Option<String>, SolverError>;
}

/// Resolves a zone name to its provider identifier with one directory query.
pub struct ZoneResolver<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: DnsApi + ?Sized> ZoneResolver<'a, A> {
    #[must_use]
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Query the provider for a zone named exactly `zone_name`.
    ///
    /// A trailing dot on `zone_name` is ignored.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` when the provider reports no match
    /// - `Ok(Some(id))` when it reports exactly one
    ///
    /// # Errors
    ///
    /// - [`ZoneError::Ambiguous`] when more than one zone matches
    /// - [`ApiError`] when the provider call fails or the answer is inconsistent
    pub async fn resolve(&self, zone_name: &str) -> Result<Option<String>, SolverError> {
        let name = DomainName::new(zone_name);
        let list = self.api.list_zones(name.as_str()).await?;

        match list.total_entries {
            0 => Ok(None),
            1 => {
                let zone = list
                    .zones
                    .into_iter()
                    .next()
                    .filter(|zone| !zone.id.is_empty())
                    .ok_or_else(|| ApiError::InvalidResponse {
                        url: format!("/zones?name={name}"),
                        reason: format!("one zone named '{name}' reported but no identifier returned"),
                    })?;
                Ok(Some(zone.id))
            }
            count => Err(ZoneError::Ambiguous {
                zone: name.to_string(),
                count,
            }
            .into()),
        }
    }
}

#[async_trait::async_trait]
impl<'a, A: DnsApi + ?Sized> ZoneLookup for ZoneResolver<'a, A> {
    async fn zone_id(&self, zone_name: &str) -> Result<Option<String>, SolverError> {
        self.resolve(zone_name).await
    }
}

#[cfg(test)]
#[path = "zone_resolver_tests.rs"]
mod zone_resolver_tests;
