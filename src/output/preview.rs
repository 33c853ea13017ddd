//! Preview line formatting

use crate::scan::EventCandidate;

/// Placeholder printed when no date could be extracted
pub const MISSING_DATE_PLACEHOLDER: &str = "????-??-??";

/// Maximum number of characters of label text shown per line
pub const EXCERPT_MAX_CHARS: usize = 120;

/// Appended when the label was cut at the excerpt limit
const TRUNCATION_MARKER: char = '…';

/// Formats one ranked entry: `NN. date  url  excerpt`
pub fn format_line(position: usize, candidate: &EventCandidate) -> String {
    let date = match candidate.date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => MISSING_DATE_PLACEHOLDER.to_string(),
    };

    format!(
        "{:02}. {}  {}  {}",
        position,
        date,
        candidate.url,
        excerpt(&candidate.text)
    )
}

/// First [`EXCERPT_MAX_CHARS`] characters of the label, marked when cut.
///
/// Character-based, not byte-based: the labels are Japanese and a byte cut
/// would split code points.
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let mut out: String = chars.by_ref().take(EXCERPT_MAX_CHARS).collect();
    if chars.next().is_some() {
        out.push(TRUNCATION_MARKER);
    }
    out
}
