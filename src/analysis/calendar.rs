//! Tolerant calendar-date parsing for contract prose

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").unwrap());

/// chrono knows only three-letter abbreviations
static FOUR_LETTER_SEPTEMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsept\b").unwrap());

static ABBREVIATED_MONTH_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]{3,4})\.(\s)").unwrap());

/// Accepted layouts, tried in order. chrono's `%B` also accepts the
/// abbreviated month name, case-insensitively.
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%B %d,%Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Parse a date fragment such as `"January 1, 2023"`, `"Jan. 1st, 2023"`,
/// `"Sept. 22, 2021"`, `"1 January 2023"`, `"2023-01-01"`, `"01/01/2023"`, or an RFC 3339
/// timestamp.
///
/// Returns `None` for anything else, including a bare year.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let cleaned = normalize(text);
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&cleaned) {
        return Some(timestamp.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

fn normalize(text: &str) -> String {
    let collapsed = text
        .trim()
        .trim_end_matches(['.', ',', ';', ':'])
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let without_ordinals = ORDINAL_SUFFIX.replace_all(&collapsed, "$1");
    let month = FOUR_LETTER_SEPTEMBER.replace_all(&without_ordinals, "Sep");
    ABBREVIATED_MONTH_DOT.replace_all(&month, "$1$2").into_owned()
}
