//! Summary assembler: runs the extractors and composes a `ContractSummary`
//!
//! The assembler owns the one cross-field rule: a non-empty explicit party list
//! on the merge result wins over anything inferred from text.

use super::extractors::{DateExtractor, NarrativeSynthesizer, PartyExtractor};
use super::types::{ExtractedParties, SummaryConfig};
use crate::merge::MergeResult;
use crate::provenance::{PartySource, Sourced};
use crate::summary::ContractSummary;

/// Composes date, party, and narrative extraction into one summary
#[derive(Debug, Clone)]
pub struct SummaryAssembler {
    config: SummaryConfig,
    dates: DateExtractor,
    parties: PartyExtractor,
    narrative: NarrativeSynthesizer,
}

impl Default for SummaryAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryAssembler {
    /// Create an assembler with default settings
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    pub fn with_config(config: SummaryConfig) -> Self {
        Self {
            dates: DateExtractor::new(&config),
            parties: PartyExtractor::new(&config),
            narrative: NarrativeSynthesizer::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Build the summary. Cannot fail: every field degrades to absent or to
    /// the sentinel narrative.
    pub fn build(&self, merge: &MergeResult) -> ContractSummary {
        let parties = self.resolve_parties(merge);
        let dates = self.dates.extract(merge);
        let narrative = self.narrative.synthesize(merge);

        tracing::debug!(
            parties = parties.as_ref().map(|p| p.source.as_str()).unwrap_or("none"),
            dates = dates.as_ref().map(|d| d.source.as_str()).unwrap_or("none"),
            narrative = narrative.source.as_str(),
            "contract summary assembled"
        );

        ContractSummary::new(parties, dates, narrative.value, narrative.source)
    }

    fn resolve_parties(&self, merge: &MergeResult) -> Option<ExtractedParties> {
        match merge.explicit_parties() {
            Some(names) => Some(Sourced::new(names, PartySource::Explicit)),
            None => self.parties.extract(merge),
        }
    }
}

/// Build a summary with default configuration
pub fn build_summary(merge: &MergeResult) -> ContractSummary {
    SummaryAssembler::new().build(merge)
}
