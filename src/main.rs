// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hetzner_acme_dns::{
    config::{ProviderSettings, SolverConfig},
    constants::{DEFAULT_LOG_LEVEL, ENV_LOG_FORMAT},
    hetzner::HetznerClient,
    solver::{try_derive_record_name, ChallengeRecordManager, ChallengeRequest},
};
use std::path::PathBuf;
use tracing::{debug, info};

/// ACME DNS-01 challenge solver for Hetzner DNS
#[derive(Debug, Parser)]
#[command(name = "hetzner-acme-dns", version)]
struct Cli {
    /// Solver configuration file (JSON: secretName, zoneName, apiUrl, strict)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Zone to use instead of searching for it
    #[arg(long, global = true, value_name = "NAME")]
    zone_name: Option<String>,

    /// Fail when the record cannot be created or deleted
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Publish the challenge TXT record
    Present {
        /// Challenge record name, e.g. `_acme-challenge.www.example.com.`
        #[arg(long)]
        fqdn: String,
        /// Zone to start the search from (defaults to the FQDN)
        #[arg(long)]
        zone: Option<String>,
        /// Challenge key (TXT value)
        #[arg(long)]
        key: String,
    },
    /// Remove the challenge TXT record
    Cleanup {
        /// Challenge record name
        #[arg(long)]
        fqdn: String,
        /// Zone to start the search from (defaults to the FQDN)
        #[arg(long)]
        zone: Option<String>,
        /// Challenge key; not needed to find the record
        #[arg(long, default_value = "")]
        key: String,
    },
    /// Find the registered zone that owns a domain
    FindZone {
        /// Domain to search from
        domain: String,
    },
    /// Print the record name of an FQDN relative to a zone
    RecordName {
        #[arg(long)]
        fqdn: String,
        #[arg(long)]
        zone: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging();

    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("hetzner-acme-dns")
        .enable_all()
        .build()?;

    runtime.block_on(run(cli))
}

/// Initialize `tracing` on stderr.
///
/// Respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT` (`json` or `text`).
fn initialize_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL));

    let log_format = std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Record naming is local; no configuration or API key required
    if let Command::RecordName { fqdn, zone } = &cli.command {
        println!("{}", try_derive_record_name(fqdn, zone)?);
        return Ok(());
    }

    let config = solver_config(&cli)?;
    let settings = ProviderSettings::from_env(&config)?;
    debug!(settings = ?settings, "Loaded provider settings");

    let client = HetznerClient::new(&settings)?;
    let manager = ChallengeRecordManager::new(client)
        .with_zone_name(config.zone_name().unwrap_or_default())
        .with_policy(config.failure_policy());

    info!(solver = manager.name(), policy = ?manager.policy(), "Starting solver");

    match cli.command {
        Command::Present { fqdn, zone, key } => {
            let outcome = manager.present(&challenge(fqdn, zone, key)).await?;
            println!(
                "{}\t{}\t{}",
                outcome.zone.name,
                outcome.record_name,
                outcome.record_id.unwrap_or_default()
            );
        }
        Command::Cleanup { fqdn, zone, key } => {
            let outcome = manager.clean_up(&challenge(fqdn, zone, key)).await?;
            println!(
                "{}\t{}\t{}\t{}",
                outcome.zone.name,
                outcome.record_name,
                outcome.record_id,
                if outcome.deleted { "deleted" } else { "not-deleted" }
            );
        }
        Command::FindZone { domain } => {
            let zone = manager
                .resolve_zone(&challenge(domain, None, String::new()))
                .await?;
            println!("{}\t{}", zone.name, zone.id);
        }
        Command::RecordName { .. } => {}
    }

    Ok(())
}

/// Load the solver configuration file, if any, and apply command-line overrides.
fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("loading solver config from {}", path.display()))?,
        None => SolverConfig::default(),
    };

    if let Some(zone_name) = &cli.zone_name {
        config.zone_name = Some(zone_name.clone());
    }
    config.strict |= cli.strict;

    Ok(config)
}

fn challenge(fqdn: String, zone: Option<String>, key: String) -> ChallengeRequest {
    ChallengeRequest {
        resolved_zone: zone.unwrap_or_else(|| fqdn.clone()),
        resolved_fqdn: fqdn,
        key,
    }
}
