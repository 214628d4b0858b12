//! Core types for contract extraction

use crate::provenance::{DateSource, PartySource, Sourced};
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// Sentinel narrative used when the merge result carries no prose at all
pub const DEFAULT_SENTINEL_NARRATIVE: &str = "No analysis available for this contract.";

/// Configuration for extraction and synthesis
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Length of the placeholder term added to a text-derived start date.
    ///
    /// Contract text rarely states its term in a parseable form, so the end
    /// date is start plus this many months. It is a placeholder, not a
    /// detected term.
    pub placeholder_term_months: u32,
    /// Minimum characters in a normalized party name
    pub min_party_name_chars: usize,
    /// Narrative used when nothing else is available
    pub sentinel_narrative: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryConfig {
    pub fn new() -> Self {
        Self {
            placeholder_term_months: 12,
            min_party_name_chars: 3,
            sentinel_narrative: DEFAULT_SENTINEL_NARRATIVE.to_string(),
        }
    }

    pub fn with_placeholder_term_months(mut self, months: u32) -> Self {
        self.placeholder_term_months = months;
        self
    }

    pub fn with_min_party_name_chars(mut self, chars: usize) -> Self {
        self.min_party_name_chars = chars;
        self
    }

    pub fn with_sentinel_narrative(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel_narrative = sentinel.into();
        self
    }
}

/// An effective date range with `start <= end`.
///
/// Fields are private: the only constructors keep the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Earliest to latest of the given dates; `None` if there are none.
    pub fn spanning(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        let sorted: BTreeSet<NaiveDate> = dates.into_iter().collect();
        let start = *sorted.first()?;
        let end = *sorted.last()?;
        Some(Self { start, end })
    }

    /// `start` plus a term of whole calendar months.
    ///
    /// A day past the end of the target month clamps to its last day
    /// (Feb 29 + 12 months is Feb 28).
    pub fn with_term(start: NaiveDate, months: u32) -> Option<Self> {
        let end = start.checked_add_months(Months::new(months))?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Effective dates with their source
pub type ExtractedDates = Sourced<DateRange, DateSource>;

/// Two or more party names with their source
pub type ExtractedParties = Sourced<Vec<String>, PartySource>;
