//! Event-Scout main entry point
//!
//! This is the command-line interface for the SUNABACO event listing
//! scanner.

use anyhow::Context;
use clap::Parser;
use event_scout::config::{load_config_with_hash, Config};
use event_scout::output::print_report;
use event_scout::scan::scan;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Event-Scout: a single-shot event listing scanner
///
/// Fetches the configured event listing page once, extracts event links
/// and their dates, and prints them soonest-first with undated entries
/// last.
#[derive(Parser, Debug)]
#[command(name = "event-scout")]
#[command(version)]
#[command(about = "Scan an event listing page and rank upcoming events", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the preview limit from the configuration
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Validate config and show what would be scanned without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No config file given, using built-in defaults");
            Config::default()
        }
    };

    let limit = cli.limit.unwrap_or(config.listing.preview_limit);

    if cli.dry_run {
        handle_dry_run(&config, limit);
        return Ok(());
    }

    handle_scan(&config, limit).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("event_scout=info,warn"),
            1 => EnvFilter::new("event_scout=debug,info"),
            2 => EnvFilter::new("event_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be scanned
fn handle_dry_run(config: &Config, limit: usize) {
    println!("=== Event-Scout Dry Run ===\n");

    println!("Listing:");
    println!("  URL: {}", config.listing.listing_url);
    println!("  Site origin: {}", config.listing.site_origin);
    println!("  Preview limit: {}", limit);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.scanner_name);
    println!("  Version: {}", config.user_agent.scanner_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\n✓ Configuration is valid");
    println!("✓ Would fetch {} once", config.listing.listing_url);
}

/// Handles the main scan operation
async fn handle_scan(config: &Config, limit: usize) -> anyhow::Result<()> {
    match scan(config).await {
        Ok(report) => {
            tracing::info!(
                "Scan completed: {} unique event links",
                report.total_unique
            );
            print_report(&report, limit);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scan failed: {}", e);
            Err(e.into())
        }
    }
}
