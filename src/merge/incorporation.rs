//! Document incorporation log entries
//!
//! The merge pipeline records each incorporated document as a single line:
//!
//! ```text
//! base.pdf (base, January 1, 2023)
//! amend1.pdf (amendment, June 15, 2023)
//! ```

use crate::analysis::parse_calendar_date;
use regex::Regex;
use std::sync::LazyLock;

/// Trailing parenthesized group; a filename may itself contain parentheses.
static ENTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\(([^()]*)\)\s*$").unwrap());

/// One parsed line of the incorporation log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorporationEntry {
    pub filename: String,
    pub role: String,
    /// Unparsed date fragment, e.g. `"January 1, 2023"`
    pub date_text: String,
}

impl IncorporationEntry {
    /// Parse a log line, returning `None` if it does not have the
    /// `"<filename> (<role>, <date-text>)"` shape.
    ///
    /// The role ends at the leftmost comma whose remainder reads as a date, so
    /// both `"base, January 1, 2023"` and `"amendment, signed, June 15, 2023"`
    /// split correctly. With no such comma the role ends at the first one.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = ENTRY_PATTERN.captures(line.trim())?;
        let filename = caps.get(1)?.as_str().trim();
        let inner = caps.get(2)?.as_str();

        let split = inner
            .match_indices(',')
            .map(|(at, _)| at)
            .find(|&at| parse_calendar_date(&inner[at + 1..]).is_some())
            .or_else(|| inner.find(','))?;
        let role = &inner[..split];
        let date_text = inner[split + 1..].trim();
        if date_text.is_empty() {
            return None;
        }

        Some(Self {
            filename: filename.to_string(),
            role: role.trim().to_string(),
            date_text: date_text.to_string(),
        })
    }
}
