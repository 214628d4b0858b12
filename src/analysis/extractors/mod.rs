//! Built-in extractors
//!
//! Each extractor is pure and total: it reads the merge result and returns a
//! value or `None`, never an error.

mod dates;
mod narrative;
mod parties;

pub use dates::DateExtractor;
pub use narrative::{NarrativeSynthesizer, AMENDMENTS_HEADING};
pub use parties::{normalize_party_name, PartyExtractor};

use super::types::{ExtractedDates, ExtractedParties};
use crate::merge::MergeResult;

/// Effective dates with default configuration
pub fn extract_dates(merge: &MergeResult) -> Option<ExtractedDates> {
    DateExtractor::default().extract(merge)
}

/// Inferred parties with default configuration.
///
/// Ignores `merge.parties`; see [`crate::build_summary`] for the explicit-list
/// precedence.
pub fn extract_parties(merge: &MergeResult) -> Option<ExtractedParties> {
    PartyExtractor::default().extract(merge)
}

/// Narrative text with default configuration
pub fn synthesize_narrative(merge: &MergeResult) -> String {
    NarrativeSynthesizer::default().synthesize(merge).value
}
