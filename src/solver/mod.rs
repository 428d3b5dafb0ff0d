// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! ACME DNS-01 challenge solving against a zone-based DNS provider.
//!
//! This module contains the provider-neutral core:
//!
//! - [`api`] - The [`DnsApi`] contract the core consumes
//! - [`zone_resolver`] - One-shot lookup of a zone identifier by exact name
//! - [`zone_search`] - Walking up the label hierarchy to find the owning zone
//! - [`record_name`] - Record names relative to a zone, including the apex
//! - [`manager`] - Present / clean-up orchestration
//!
//! # Architecture
//!
//! ```text
//! ChallengeRecordManager
//!   ├── search_zone_name (when no zone is configured)
//!   │     └── ZoneResolver ── DnsApi::list_zones
//!   ├── derive_record_name
//!   └── DnsApi::create_record / list_records / delete_record
//! ```
//!
//! Every provider round-trip is awaited in sequence. Nothing is cached between
//! invocations.

pub mod api;
pub mod manager;
pub mod record_name;
pub mod zone_resolver;
pub mod zone_search;

#[cfg(test)]
pub(crate) mod mock_api;

pub use api::{DnsApi, NewRecord, RecordSummary, ZoneList, ZoneSummary};
pub use manager::{
    find_record_id, log_search_report, ChallengeRecordManager, ChallengeRequest, CleanUpOutcome,
    FailurePolicy, PresentOutcome,
};
pub use record_name::{derive_record_name, try_derive_record_name};
pub use zone_resolver::{ZoneLookup, ZoneResolver};
pub use zone_search::{
    search_zone_name, CandidateAttempt, CandidateOutcome, FoundZone, ZoneSearchReport,
};
