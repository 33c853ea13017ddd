//! Link harvester for the listing page
//!
//! Walks anchor elements in document order, keeps the ones that point at
//! event pages, resolves their hrefs against the site origin, and attaches
//! a date parsed out of the anchor label when one is present.

use crate::date::extract_date;
use crate::url::{is_event_link, resolve_event_url};
use chrono::NaiveDate;
use scraper::{Html, Selector};

/// A harvested, URL-addressed listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCandidate {
    /// Absolute event URL
    pub url: String,

    /// Event date parsed from the label, when present
    pub date: Option<NaiveDate>,

    /// Whitespace-collapsed anchor label
    pub text: String,
}

/// Harvests event candidates from listing page markup
///
/// Output preserves document order and may contain duplicate URLs; the
/// deduplicator runs afterwards. Anchors without an href and anchors whose
/// href does not contain `/event/` are skipped silently.
///
/// # Arguments
///
/// * `html` - The listing page content
/// * `site_origin` - Origin prepended to site-relative hrefs
pub fn harvest(html: &str, site_origin: &str) -> Vec<EventCandidate> {
    let document = Html::parse_document(html);

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if !is_event_link(href) {
            continue;
        }

        let url = resolve_event_url(href, site_origin);
        let text = collapse_label(element.text());
        let date = extract_date(&text);

        candidates.push(EventCandidate { url, date, text });
    }

    candidates
}

/// Joins an anchor's text nodes with single spaces and collapses whitespace runs
fn collapse_label<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
