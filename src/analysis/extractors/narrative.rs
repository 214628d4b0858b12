//! Narrative synthesis
//!
//! The AI-authored final summary is used verbatim when present. Otherwise the
//! narrative is assembled in a fixed order:
//!
//! 1. base summary (or the sentinel)
//! 2. "Key Changes and Amendments" with each amendment's bullets, in input order
//! 3. clause change tally (non-zero categories only)
//! 4. a closing sentence on how many documents were incorporated
//!
//! The output depends on nothing but the merge result.

use crate::analysis::types::SummaryConfig;
use crate::merge::{AmendmentSummary, ChangeType, ClauseChange, MergeResult};
use crate::provenance::{NarrativeSource, Sourced};

pub const AMENDMENTS_HEADING: &str = "Key Changes and Amendments:";

/// Builds the narrative text of a contract summary
#[derive(Debug, Clone)]
pub struct NarrativeSynthesizer {
    sentinel: String,
}

impl Default for NarrativeSynthesizer {
    fn default() -> Self {
        Self::new(&SummaryConfig::default())
    }
}

impl NarrativeSynthesizer {
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            sentinel: config.sentinel_narrative.clone(),
        }
    }

    pub fn synthesize(&self, merge: &MergeResult) -> Sourced<String, NarrativeSource> {
        if let Some(summary) = merge.final_summary_text() {
            tracing::debug!("narrative from final summary");
            return Sourced::new(summary.to_string(), NarrativeSource::AiSummary);
        }

        let base = merge.base_summary_text();
        let mut sections = vec![base.unwrap_or(self.sentinel.as_str()).to_string()];

        if let Some(section) = amendments_section(&merge.amendment_summaries) {
            sections.push(section);
        }
        if let Some(section) = clause_tally_section(&merge.clause_change_log) {
            sections.push(section);
        }
        if let Some(section) = incorporation_section(merge.document_incorporation_log.len()) {
            sections.push(section);
        }

        let source = if base.is_none() && sections.len() == 1 {
            NarrativeSource::Sentinel
        } else {
            NarrativeSource::Synthesized
        };
        tracing::debug!(%source, sections = sections.len(), "narrative synthesized");

        Sourced::new(sections.join("\n\n"), source)
    }
}

fn amendments_section(amendments: &[AmendmentSummary]) -> Option<String> {
    if amendments.is_empty() {
        return None;
    }

    let mut section = String::from(AMENDMENTS_HEADING);
    for amendment in amendments {
        let name = amendment.document.trim();
        section.push_str("\n\n");
        section.push_str(if name.is_empty() { "Unnamed amendment" } else { name });
        section.push(':');
        for change in &amendment.changes {
            section.push_str("\n- ");
            section.push_str(change.trim());
        }
    }
    Some(section)
}

fn clause_tally_section(log: &[ClauseChange]) -> Option<String> {
    let count = |kind: ChangeType| log.iter().filter(|c| c.change_type == kind).count();
    let added = count(ChangeType::Added);
    let modified = count(ChangeType::Modified);
    let deleted = count(ChangeType::Deleted);

    let mut parts = Vec::new();
    if added > 0 {
        parts.push(format!("{} new {} added", added, plural(added, "clause")));
    }
    if modified > 0 {
        parts.push(format!("{} {} modified", modified, plural(modified, "clause")));
    }
    if deleted > 0 {
        parts.push(format!("{} {} deleted", deleted, plural(deleted, "clause")));
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("Clause changes: {}.", parts.join(", ")))
    }
}

fn incorporation_section(documents: usize) -> Option<String> {
    if documents == 0 {
        return None;
    }
    Some(format!(
        "This unified contract incorporates {} {}, merged in chronological order so that later amendments take precedence over earlier terms.",
        documents,
        plural(documents, "document")
    ))
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesize(merge: &MergeResult) -> Sourced<String, NarrativeSource> {
        NarrativeSynthesizer::default().synthesize(merge)
    }

    #[test]
    fn test_final_summary_is_verbatim() {
        let merge = MergeResult {
            final_summary: Some("  AI summary.\n".into()),
            base_summary: Some("Base.".into()),
            clause_change_log: vec![ClauseChange::new(ChangeType::Added)],
            ..Default::default()
        };
        let narrative = synthesize(&merge);
        assert_eq!(narrative.value, "  AI summary.\n");
        assert_eq!(narrative.source, NarrativeSource::AiSummary);
    }

    #[test]
    fn test_blank_final_summary_is_ignored() {
        let merge = MergeResult {
            final_summary: Some("   ".into()),
            base_summary: Some("Base.".into()),
            ..Default::default()
        };
        let narrative = synthesize(&merge);
        assert_eq!(narrative.value, "Base.");
        assert_eq!(narrative.source, NarrativeSource::Synthesized);
    }

    #[test]
    fn test_sentinel_when_nothing_available() {
        let narrative = synthesize(&MergeResult::default());
        assert_eq!(narrative.value, crate::analysis::types::DEFAULT_SENTINEL_NARRATIVE);
        assert_eq!(narrative.source, NarrativeSource::Sentinel);
    }

    #[test]
    fn test_amendments_keep_input_order() {
        let merge = MergeResult {
            base_summary: Some("Base.".into()),
            amendment_summaries: vec![
                AmendmentSummary::new("zeta.pdf", vec!["Raised fees".into()]),
                AmendmentSummary::new(
                    "alpha.pdf",
                    vec!["Extended term".into(), "Added SLA".into()],
                ),
            ],
            ..Default::default()
        };
        let narrative = synthesize(&merge).value;
        assert_eq!(
            narrative,
            "Base.\n\nKey Changes and Amendments:\n\nzeta.pdf:\n- Raised fees\n\nalpha.pdf:\n- Extended term\n- Added SLA"
        );
    }

    #[test]
    fn test_clause_tally_skips_zero_categories() {
        let log = vec![
            ClauseChange::new(ChangeType::Deleted),
            ClauseChange::new(ChangeType::Deleted),
            ClauseChange::new(ChangeType::Other),
        ];
        assert_eq!(
            clause_tally_section(&log).as_deref(),
            Some("Clause changes: 2 clauses deleted.")
        );
        assert_eq!(clause_tally_section(&[ClauseChange::new(ChangeType::Other)]), None);
    }

    #[test]
    fn test_incorporation_sentence() {
        let sentence = incorporation_section(3).unwrap();
        assert!(sentence.contains("incorporates 3 documents"));
        assert!(incorporation_section(1).unwrap().contains("incorporates 1 document,"));
        assert!(incorporation_section(0).is_none());
    }

    #[test]
    fn test_sentinel_with_change_data_is_synthesized() {
        let merge = MergeResult {
            document_incorporation_log: vec!["a.pdf (base, January 1, 2023)".into()],
            ..Default::default()
        };
        let narrative = synthesize(&merge);
        assert_eq!(narrative.source, NarrativeSource::Synthesized);
        assert!(narrative
            .value
            .starts_with(crate::analysis::types::DEFAULT_SENTINEL_NARRATIVE));
    }
}
