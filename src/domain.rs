// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Domain names and zone candidate generation.
//!
//! A [`DomainName`] is a dot-separated sequence of labels. At most one trailing
//! dot is stripped on construction, so `example.com.` and `example.com` compare
//! equal. No case folding is performed.
//!
//! # Example
//!
//! ```rust
//! use hetzner_acme_dns::domain::DomainName;
//!
//! let name = DomainName::new("_acme-challenge.www.example.com.");
//! let candidates: Vec<&str> = name.candidates().collect();
//! assert_eq!(
//!     candidates,
//!     vec!["_acme-challenge.www.example.com", "www.example.com", "example.com"]
//! );
//! ```

use crate::constants::MIN_ZONE_LABELS;
use std::fmt;
use std::str::FromStr;

/// A domain name with at most one trailing dot removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DomainName(String);

impl DomainName {
    /// Create a domain name, stripping a single trailing dot if present.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self(name.strip_suffix('.').unwrap_or(name).to_string())
    }

    /// The name without its trailing dot.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with a trailing dot, as ACME challenge requests carry it.
    #[must_use]
    pub fn to_fqdn(&self) -> String {
        format!("{}.", self.0)
    }

    /// Labels from most to least specific. An empty name has a single empty label.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of labels in the name.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// True if at least one zone candidate can be formed from this name.
    #[must_use]
    pub fn has_zone_candidates(&self) -> bool {
        self.label_count() >= MIN_ZONE_LABELS
    }

    /// Candidate zone names, from the full name down to the last two labels.
    ///
    /// The first candidate is always the name itself; no candidate has fewer
    /// than two labels. A name with fewer than two labels yields nothing.
    #[must_use]
    pub fn candidates(&self) -> ZoneCandidates<'_> {
        ZoneCandidates {
            rest: Some(self.as_str()),
        }
    }
}

/// Iterator over candidate zone names, produced by [`DomainName::candidates`].
#[derive(Debug, Clone)]
pub struct ZoneCandidates<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for ZoneCandidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.rest?;
        if current.split('.').count() < MIN_ZONE_LABELS {
            self.rest = None;
            return None;
        }
        self.rest = current.split_once('.').map(|(_, parent)| parent);
        Some(current)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for DomainName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DomainName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod domain_tests;
