// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # hetzner-acme-dns - ACME DNS-01 solver for Hetzner DNS
//!
//! Publishes and removes the `_acme-challenge` TXT records an ACME server checks
//! during DNS-01 validation, using the Hetzner DNS API.
//!
//! ## Overview
//!
//! For every challenge the solver:
//!
//! - Finds the Hetzner zone that owns the challenge name, walking up the label
//!   hierarchy (`a.b.example.com` → `b.example.com` → `example.com`) unless a
//!   zone name is configured
//! - Derives the record name relative to that zone (`@` for the apex)
//! - Creates the TXT record on present, or finds and deletes it on clean-up
//!
//! ## Modules
//!
//! - [`solver`] - Provider-neutral zone search, record naming and orchestration
//! - [`hetzner`] - `reqwest` client for the Hetzner DNS API
//! - [`config`] - Solver configuration and provider settings
//! - [`domain`] - Domain name handling and zone candidates
//! - [`dns_errors`] - Error types with stable reason codes
//!
//! ## Example
//!
//! ```rust
//! use hetzner_acme_dns::domain::DomainName;
//! use hetzner_acme_dns::solver::derive_record_name;
//!
//! let domain = DomainName::new("_acme-challenge.www.example.com.");
//! let candidates: Vec<String> = domain.candidates().map(|c| c.to_string()).collect();
//! assert_eq!(
//!     candidates,
//!     ["_acme-challenge.www.example.com", "www.example.com", "example.com"]
//! );
//!
//! assert_eq!(
//!     derive_record_name("_acme-challenge.www.example.com.", "example.com"),
//!     "_acme-challenge.www"
//! );
//! ```

pub mod config;
pub mod constants;
pub mod dns_errors;
pub mod domain;
pub mod hetzner;
pub mod http_errors;
pub mod solver;
pub mod status_reasons;
