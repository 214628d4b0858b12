//! The assembled contract summary and its flat view

use crate::analysis::{DateRange, ExtractedDates, ExtractedParties};
use crate::provenance::{DateSource, NarrativeSource, PartySource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display-ready summary of one merge result.
///
/// Immutable once built. Each derived field is either present with its source
/// or absent as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "SummaryView")]
pub struct ContractSummary {
    parties: Option<ExtractedParties>,
    dates: Option<ExtractedDates>,
    narrative: String,
    narrative_source: NarrativeSource,
}

impl ContractSummary {
    pub(crate) fn new(
        parties: Option<ExtractedParties>,
        dates: Option<ExtractedDates>,
        narrative: String,
        narrative_source: NarrativeSource,
    ) -> Self {
        Self {
            parties,
            dates,
            narrative,
            narrative_source,
        }
    }

    pub fn parties(&self) -> Option<&[String]> {
        self.parties.as_ref().map(|p| p.value.as_slice())
    }

    pub fn parties_source(&self) -> Option<PartySource> {
        self.parties.as_ref().map(|p| p.source)
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.dates.as_ref().map(|d| d.value)
    }

    pub fn effective_start(&self) -> Option<NaiveDate> {
        self.date_range().map(|range| range.start())
    }

    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.date_range().map(|range| range.end())
    }

    pub fn dates_source(&self) -> Option<DateSource> {
        self.dates.as_ref().map(|d| d.source)
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn narrative_source(&self) -> NarrativeSource {
        self.narrative_source
    }

    /// Flat record for serialization and presentation layers
    pub fn to_view(&self) -> SummaryView {
        SummaryView {
            parties: self.parties().map(<[String]>::to_vec),
            parties_source: self.parties_source(),
            effective_start: self.effective_start(),
            effective_end: self.effective_end(),
            dates_source: self.dates_source(),
            narrative: self.narrative.clone(),
            narrative_source: self.narrative_source,
        }
    }
}

impl From<ContractSummary> for SummaryView {
    fn from(summary: ContractSummary) -> Self {
        summary.to_view()
    }
}

/// View of a contract summary (returned to presentation layers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parties_source: Option<PartySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates_source: Option<DateSource>,
    pub narrative: String,
    pub narrative_source: NarrativeSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provenance::Sourced;
    use serde_json::json;

    #[test]
    fn test_serializes_flat_view() {
        let range = DateRange::spanning([
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        ])
        .unwrap();
        let summary = ContractSummary::new(
            Some(Sourced::new(
                vec!["Acme Corp".into(), "Beta LLC".into()],
                PartySource::Explicit,
            )),
            Some(Sourced::new(range, DateSource::LogDerived)),
            "Narrative.".into(),
            NarrativeSource::Synthesized,
        );

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({
                "parties": ["Acme Corp", "Beta LLC"],
                "parties_source": "explicit",
                "effective_start": "2023-01-01",
                "effective_end": "2023-06-15",
                "dates_source": "log-derived",
                "narrative": "Narrative.",
                "narrative_source": "synthesized",
            })
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let summary =
            ContractSummary::new(None, None, "Nothing.".into(), NarrativeSource::Sentinel);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({"narrative": "Nothing.", "narrative_source": "sentinel"})
        );
        assert!(summary.parties().is_none());
        assert!(summary.parties_source().is_none());
        assert!(summary.effective_start().is_none());
        assert!(summary.dates_source().is_none());
    }
}
