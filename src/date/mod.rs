//! Date extraction from free-form anchor text
//!
//! The SUNABACO listing writes event dates into the link label as
//! `開催日:YYYY-MM-DD` (or `/`-separated, sometimes with a full-width colon
//! or typographically substituted dashes). This module turns such a
//! fragment into a calendar date, or signals absence. Nothing in here
//! raises: a label that fails to parse is the same as no label at all.

use chrono::{FixedOffset, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Label + date token pattern. The alternation keeps the separator
/// consistent within one token: `2026-03-01` and `2026/03/01` match,
/// `2026-03/01` does not.
static DATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"開催日[:：]\s*([0-9]{4}-[0-9]{2}-[0-9]{2}|[0-9]{4}/[0-9]{2}/[0-9]{2})")
        .expect("date label pattern is valid")
});

/// Extracts the labeled event date from a text fragment.
///
/// The leftmost `開催日:` label wins when several are present. Returns
/// `None` when no label matches or the token is not a real calendar date
/// (month 13, day 32, Feb 30).
///
/// # Example
///
/// ```
/// use event_scout::date::extract_date;
/// use chrono::NaiveDate;
///
/// let date = extract_date("もくもく会 開催日:2026-03-01 19:00〜");
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 1));
/// ```
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    // Scraped labels sometimes carry en/em dashes where a hyphen is meant
    let normalized = text.replace(['\u{2013}', '\u{2014}'], "-");

    let caps = DATE_LABEL.captures(&normalized)?;
    let token = caps[1].replace('/', "-");

    NaiveDate::parse_from_str(&token, "%Y-%m-%d").ok()
}

/// JST (UTC+9), the timezone the listing publishes dates in
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Current calendar date in JST
pub fn today_jst() -> NaiveDate {
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS).expect("JST offset is in range");
    Utc::now().with_timezone(&jst).date_naive()
}

/// Signed number of days from `today` until `event` (negative when past)
pub fn days_until(event: NaiveDate, today: NaiveDate) -> i64 {
    (event - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_extract_hyphen_date() {
        assert_eq!(
            extract_date("Workshop 開催日:2026-03-01"),
            Some(ymd(2026, 3, 1))
        );
    }

    #[test]
    fn test_extract_slash_date() {
        assert_eq!(
            extract_date("Workshop 開催日:2026/03/01"),
            Some(ymd(2026, 3, 1))
        );
    }

    #[test]
    fn test_extract_full_width_colon() {
        assert_eq!(
            extract_date("もくもく会 開催日：2025-12-25"),
            Some(ymd(2025, 12, 25))
        );
    }

    #[test]
    fn test_extract_with_whitespace_after_colon() {
        assert_eq!(
            extract_date("開催日: 2026-01-15"),
            Some(ymd(2026, 1, 15))
        );
        // Full-width space after the colon
        assert_eq!(
            extract_date("開催日:\u{3000}2026-01-15"),
            Some(ymd(2026, 1, 15))
        );
    }

    #[test]
    fn test_extract_en_dash_date() {
        assert_eq!(
            extract_date("開催日:2026\u{2013}03\u{2013}01"),
            Some(ymd(2026, 3, 1))
        );
    }

    #[test]
    fn test_extract_em_dash_date() {
        assert_eq!(
            extract_date("開催日:2026\u{2014}03\u{2014}01"),
            Some(ymd(2026, 3, 1))
        );
    }

    #[test]
    fn test_no_label_yields_none() {
        assert_eq!(extract_date("Workshop 2026-03-01"), None);
        assert_eq!(extract_date("ただのテキスト"), None);
        assert_eq!(extract_date(""), None);
    }

    #[test]
    fn test_invalid_calendar_date_yields_none() {
        assert_eq!(extract_date("開催日:2026-13-01"), None);
        assert_eq!(extract_date("開催日:2026-02-30"), None);
        assert_eq!(extract_date("開催日:2026-00-10"), None);
    }

    #[test]
    fn test_mixed_separator_yields_none() {
        assert_eq!(extract_date("開催日:2026-03/01"), None);
        assert_eq!(extract_date("開催日:2026/03-01"), None);
    }

    #[test]
    fn test_leftmost_label_wins() {
        assert_eq!(
            extract_date("開催日:2026-05-05 振替 開催日:2026-01-01"),
            Some(ymd(2026, 5, 5))
        );
    }

    #[test]
    fn test_label_required_before_token() {
        // A bare date after unrelated text with no label is ignored
        assert_eq!(extract_date("締切 2026-03-01 開催日:2026-04-02"), Some(ymd(2026, 4, 2)));
    }

    #[test]
    fn test_short_tokens_rejected() {
        assert_eq!(extract_date("開催日:2026-3-1"), None);
        assert_eq!(extract_date("開催日:26-03-01"), None);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(ymd(2026, 3, 10), ymd(2026, 3, 1)), 9);
        assert_eq!(days_until(ymd(2026, 3, 1), ymd(2026, 3, 1)), 0);
        assert_eq!(days_until(ymd(2026, 2, 27), ymd(2026, 3, 1)), -2);
    }
}
