//! Effective date extraction
//!
//! Two passes, first success wins:
//!
//! 1. **Log-derived**: every parseable date in the document incorporation log;
//!    the range runs from the earliest to the latest. Log order says nothing
//!    about date order.
//! 2. **Text-derived**: the first drafting phrase in the contract text that
//!    carries a valid date. The end date is a placeholder term after it.

use crate::analysis::calendar::parse_calendar_date;
use crate::analysis::cascade::{ExtractFn, PatternCascade, Scan};
use crate::analysis::types::{DateRange, ExtractedDates, SummaryConfig};
use crate::merge::{IncorporationEntry, MergeResult};
use crate::provenance::{DateSource, Sourced};
use chrono::NaiveDate;
use regex::Captures;
use std::sync::LazyLock;

/// `Month D, YYYY` and its variants, `MM/DD/YYYY`, or `YYYY-MM-DD`
const DATE: &str = r"([A-Za-z]{3,9}\.?\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}|\d{1,2}/\d{1,2}/\d{4}|\d{4}-\d{2}-\d{2})";

/// `Month D, YYYY` only
const MONTH_DAY_YEAR: &str = r"([A-Za-z]{3,9}\.?\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4})";

/// Contract-drafting idioms, most conventional first
static TEXT_DATE_RULES: LazyLock<PatternCascade<NaiveDate>> = LazyLock::new(|| {
    let entered_into = format!(
        r"(?i)\bentered\s+into\s+(?:on\s+|as\s+of\s+|effective\s+)?(?:this\s+)?{}",
        DATE
    );
    let effective = format!(
        r"(?i)\beffective\s+(?:as\s+of\s+|on\s+|date\s*:\s*|date\s+(?:of\s+|is\s+)?)?{}",
        DATE
    );
    let dated = format!(r"(?i)\bdated\s+(?:as\s+of\s+)?{}", DATE);
    let this_agreement = format!(r"(?i)\bthis\s+agreement\b[^.]{{0,200}}?{}", MONTH_DAY_YEAR);
    let day_of = r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+day\s+of\s+([A-Za-z]{3,9}),?\s+(\d{4})";

    PatternCascade::compile(&[
        ("entered-into", entered_into.as_str(), date_in_group as ExtractFn<NaiveDate>),
        ("effective", effective.as_str(), date_in_group),
        ("dated", dated.as_str(), date_in_group),
        ("this-agreement", this_agreement.as_str(), date_in_group),
        ("day-of", day_of, day_of_month),
    ])
    .unwrap()
});

fn date_in_group(caps: &Captures<'_>) -> Option<NaiveDate> {
    parse_calendar_date(caps.get(1)?.as_str())
}

/// "3rd day of March, 2022"
fn day_of_month(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day = caps.get(1)?.as_str();
    let month = caps.get(2)?.as_str();
    let year = caps.get(3)?.as_str();
    parse_calendar_date(&format!("{} {}, {}", month, day, year))
}

/// Derives the effective start/end pair of a merge result
#[derive(Debug, Clone)]
pub struct DateExtractor {
    placeholder_term_months: u32,
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new(&SummaryConfig::default())
    }
}

impl DateExtractor {
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            placeholder_term_months: config.placeholder_term_months,
        }
    }

    /// Log-derived dates if any parse, else text-derived, else `None`.
    pub fn extract(&self, merge: &MergeResult) -> Option<ExtractedDates> {
        self.from_incorporation_log(merge)
            .or_else(|| self.from_contract_text(merge))
    }

    /// Span of every parseable date in the incorporation log
    pub fn from_incorporation_log(&self, merge: &MergeResult) -> Option<ExtractedDates> {
        let log = &merge.document_incorporation_log;
        let dates: Vec<NaiveDate> = log
            .iter()
            .filter_map(|line| IncorporationEntry::parse(line))
            .filter_map(|entry| parse_calendar_date(&entry.date_text))
            .collect();

        if dates.len() < log.len() {
            tracing::debug!(
                skipped = log.len() - dates.len(),
                "incorporation log entries without a parseable date"
            );
        }

        let range = DateRange::spanning(dates)?;
        tracing::debug!(start = %range.start(), end = %range.end(), "dates from incorporation log");
        Some(Sourced::new(range, DateSource::LogDerived))
    }

    /// First dated drafting phrase in the contract text, plus the placeholder term
    pub fn from_contract_text(&self, merge: &MergeResult) -> Option<ExtractedDates> {
        let text = merge.final_contract_text()?;
        let months = self.placeholder_term_months;

        let hit = TEXT_DATE_RULES.resolve(text, Scan::AllMatches, |start| {
            DateRange::with_term(*start, months).is_some()
        })?;
        let range = DateRange::with_term(hit.value, months)?;

        tracing::debug!(rule = hit.rule_id, start = %range.start(), "dates from contract text");
        Some(Sourced::new(range, DateSource::TextDerived))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_log(entries: &[&str]) -> MergeResult {
        MergeResult {
            document_incorporation_log: entries.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn with_contract(text: &str) -> MergeResult {
        MergeResult {
            final_contract: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_log_dates_span_earliest_to_latest() {
        let merge = with_log(&[
            "amend2.pdf (amendment, March 1, 2024)",
            "base.pdf (base, January 1, 2023)",
            "amend1.pdf (amendment, June 15, 2023)",
        ]);
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.source, DateSource::LogDerived);
        assert_eq!(dates.value.start(), date(2023, 1, 1));
        assert_eq!(dates.value.end(), date(2024, 3, 1));
    }

    #[test]
    fn test_log_skips_malformed_entries() {
        let merge = with_log(&[
            "notes.txt",
            "base.pdf (base, not a date)",
            "amend1.pdf (amendment, 2023-06-15)",
        ]);
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.value.start(), date(2023, 6, 15));
        assert_eq!(dates.value.end(), date(2023, 6, 15));
    }

    #[test]
    fn test_log_wins_over_contract_text() {
        let mut merge = with_log(&["base.pdf (base, January 1, 2023)"]);
        merge.final_contract = Some("This Agreement is dated May 5, 2020.".into());
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.source, DateSource::LogDerived);
    }

    #[test]
    fn test_text_fallback_adds_placeholder_year() {
        let merge = with_contract(
            "This Agreement is entered into on March 3, 2022, by and between the parties.",
        );
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.source, DateSource::TextDerived);
        assert_eq!(dates.value.start(), date(2022, 3, 3));
        assert_eq!(dates.value.end(), date(2023, 3, 3));
    }

    #[test]
    fn test_text_rules_follow_table_order() {
        // "dated" appears first in the text but "effective" ranks higher
        let merge = with_contract(
            "Letter dated January 5, 2021. The terms are effective as of February 1, 2021.",
        );
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.value.start(), date(2021, 2, 1));
    }

    #[test]
    fn test_text_rule_skips_unparseable_match() {
        let merge = with_contract(
            "Effective Date: Smarch 40, 2021. This amendment is effective on 2021-07-01.",
        );
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.value.start(), date(2021, 7, 1));
    }

    #[test]
    fn test_this_agreement_phrase() {
        let merge =
            with_contract("This Agreement, made and signed April 9, 2019, governs hosting.");
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.value.start(), date(2019, 4, 9));
    }

    #[test]
    fn test_day_of_idiom() {
        let merge = with_contract("Signed this 3rd day of March, 2022 at Springfield.");
        let dates = DateExtractor::default().extract(&merge).unwrap();
        assert_eq!(dates.value.start(), date(2022, 3, 3));
    }

    #[test]
    fn test_configured_placeholder_term() {
        let config = SummaryConfig::new().with_placeholder_term_months(24);
        let merge = with_contract("This lease is dated 2020-01-15.");
        let dates = DateExtractor::new(&config).extract(&merge).unwrap();
        assert_eq!(dates.value.end(), date(2022, 1, 15));
    }

    #[test]
    fn test_no_dates_is_none() {
        let mut merge = with_log(&["base.pdf (base, someday)"]);
        merge.final_contract = Some("The parties agree to cooperate in good faith.".into());
        assert!(DateExtractor::default().extract(&merge).is_none());
        assert!(DateExtractor::default().extract(&MergeResult::default()).is_none());
    }
}
