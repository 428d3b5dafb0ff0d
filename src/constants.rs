// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Hetzner DNS-01 solver.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Solver Constants
// ============================================================================

/// Name under which the solver registers with cert-manager
pub const SOLVER_NAME: &str = "hetzner";

// ============================================================================
// DNS Constants
// ============================================================================

/// Record name the provider uses for the zone apex
pub const ZONE_APEX_RECORD_NAME: &str = "@";

/// Record type used for ACME DNS-01 challenges
pub const RECORD_TYPE_TXT: &str = "TXT";

/// TTL for challenge TXT records (2 minutes)
pub const CHALLENGE_RECORD_TTL_SECS: u32 = 120;

/// Minimum number of labels a zone candidate must carry (e.g. `example.com`)
pub const MIN_ZONE_LABELS: usize = 2;

// ============================================================================
// Hetzner API Constants
// ============================================================================

/// Default Hetzner DNS API base URL
pub const DEFAULT_API_URL: &str = "https://api.hetzner.cloud/v1";

/// Default timeout for a single HTTP request to the Hetzner API (30 seconds)
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the Hetzner API token
pub const ENV_API_KEY: &str = "HETZNER_API_KEY";

/// Environment variable overriding the Hetzner API base URL
pub const ENV_API_URL: &str = "HETZNER_API_URL";

/// Environment variable overriding the HTTP request timeout in seconds
pub const ENV_API_TIMEOUT_SECS: &str = "HETZNER_API_TIMEOUT_SECS";

// ============================================================================
// Logging Constants
// ============================================================================

/// Environment variable selecting the log output format (`text` or `json`)
pub const ENV_LOG_FORMAT: &str = "RUST_LOG_FORMAT";

/// Default log level when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";
