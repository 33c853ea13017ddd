//! The scan pipeline: fetch, harvest, dedupe, rank
//!
//! One pass over one page. The only I/O lives in the fetcher; everything
//! after it operates on in-memory data and returns a new value, so the
//! pure half of the pipeline is exposed separately as [`assemble_report`].

mod dedupe;
mod fetcher;
mod harvester;
mod rank;

pub use dedupe::dedupe;
pub use fetcher::{build_http_client, fetch_listing};
pub use harvester::{harvest, EventCandidate};
pub use rank::rank;

use crate::config::Config;
use crate::Result;

/// Outcome of one scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Count of unique event URLs on the listing page
    pub total_unique: usize,

    /// Candidates ordered soonest-first, undated entries last
    pub ranked: Vec<EventCandidate>,
}

/// Runs the pure half of the pipeline over already-fetched page content
pub fn assemble_report(html: &str, site_origin: &str) -> ScanReport {
    let harvested = harvest(html, site_origin);
    tracing::debug!("Harvested {} candidate links", harvested.len());

    let unique = dedupe(harvested);
    let total_unique = unique.len();

    let ranked = rank(unique);

    ScanReport {
        total_unique,
        ranked,
    }
}

/// Fetches the configured listing page and runs the pipeline over it
///
/// This is the main entry point for a scan. It will:
/// 1. Build the HTTP client
/// 2. Fetch the listing page (fatal on failure)
/// 3. Harvest event candidates with optional dates
/// 4. Deduplicate by URL and rank by date
pub async fn scan(config: &Config) -> Result<ScanReport> {
    let client = build_http_client(&config.user_agent)?;
    let html = fetch_listing(&client, &config.listing.listing_url).await?;
    Ok(assemble_report(&html, &config.listing.site_origin))
}
