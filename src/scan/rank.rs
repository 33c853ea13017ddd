//! Ranking by event date
//!
//! Dated candidates ascend by date; dateless ones sort after every dated
//! one. The sort is stable, so harvested order breaks all ties.

use super::EventCandidate;
use chrono::NaiveDate;

/// Orders candidates soonest-first, dateless last
pub fn rank(mut candidates: Vec<EventCandidate>) -> Vec<EventCandidate> {
    // Vec::sort_by_key is stable; the sentinel only matters within the
    // dateless partition, where input order is preserved.
    candidates.sort_by_key(|candidate| {
        (
            candidate.date.is_none(),
            candidate.date.unwrap_or(NaiveDate::MAX),
        )
    });
    candidates
}
