//! Output module: the ranked preview presenter

mod preview;

pub use preview::{excerpt, format_line, EXCERPT_MAX_CHARS, MISSING_DATE_PLACEHOLDER};

use crate::date::{days_until, today_jst};
use crate::scan::ScanReport;

/// Prints the scan result: a count header and a bounded ranked preview
pub fn print_report(report: &ScanReport, limit: usize) {
    println!("{} unique event links found", report.total_unique);
    println!();

    for (index, candidate) in report.ranked.iter().take(limit).enumerate() {
        println!("{}", format_line(index + 1, candidate));
    }

    if report.total_unique > limit {
        println!("... and {} more", report.total_unique - limit);
    }

    // The listing publishes JST dates; measure proximity against JST today
    if let Some(soonest) = report.ranked.iter().find_map(|c| c.date) {
        let days = days_until(soonest, today_jst());
        tracing::info!("Soonest event {} is {} day(s) away", soonest, days);
    }
}
