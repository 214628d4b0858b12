//! Contracting-party extraction
//!
//! An ordered cascade of two-party phrases is run over the unified contract
//! text, then a reduced cascade over the base summary. Only the leftmost
//! match of each phrase is considered; a pair with a name that is too short
//! counts as a miss and the next phrase is tried.
//!
//! Explicit party lists on the merge result take precedence, but that rule
//! belongs to the assembler; this extractor only ever infers.

use crate::analysis::cascade::{ExtractFn, PatternCascade, Scan};
use crate::analysis::types::{ExtractedParties, SummaryConfig};
use crate::merge::MergeResult;
use crate::provenance::{PartySource, Sourced};
use regex::{Captures, Regex};
use std::sync::LazyLock;

type NamePair = (String, String);

/// A party name up to the next comma, semicolon, parenthesis, or line break
const NAME: &str = r"([^,;()\n]+?)";

/// Optional descriptor after a name: ", a Delaware corporation"
const DESCRIPTOR: &str = r"(?:\s*,[^;()\n]*?)?";

/// Optional parenthesized defined term: `("Acme")`
const DEFINED_TERM: &str = r"(?:\s*\([^)]*\))?";

/// Where the second name ends
const BOUNDARY: &str = r"(?:\s*[,;.(\n]|\s+(?:dated|effective|on|for|whereby|with|as|under|in|is|was|to|that|which|who|regarding|relating|covering)\b|\s*$)";

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^the\s+").unwrap());

/// Two-party phrases, most specific first
static PARTY_RULES: LazyLock<PatternCascade<NamePair>> = LazyLock::new(|| {
    let first_party = format!("{}{}{}{},?", NAME, DEFINED_TERM, DESCRIPTOR, DEFINED_TERM);
    let client_provider = role_pair("client|customer", "provider|company|contractor");
    let between_and = format!(
        r"(?i)\bbetween\s+{}\s+and\s+{}{}",
        first_party, NAME, BOUNDARY
    );
    let entered_into_by = format!(
        r"(?i)\bentered\s+into\s+by\s+(?:and\s+between\s+)?{}\s+and\s+{}{}",
        first_party, NAME, BOUNDARY
    );
    let provider_client = role_pair("provider|company|contractor", "client|customer");

    PatternCascade::compile(&[
        ("client-provider", client_provider.as_str(), name_pair as ExtractFn<NamePair>),
        ("between-and", between_and.as_str(), name_pair),
        ("entered-into-by", entered_into_by.as_str(), name_pair),
        ("provider-client", provider_client.as_str(), name_pair),
    ])
    .unwrap()
});

/// Phrases still meaningful in summary prose
const SUMMARY_RULE_IDS: &[&str] = &["client-provider", "between-and"];

static SUMMARY_PARTY_RULES: LazyLock<PatternCascade<NamePair>> =
    LazyLock::new(|| PARTY_RULES.subset(SUMMARY_RULE_IDS));

/// "between X, <descriptor> (the "Role"), and Y (the "Role")" with the roles
/// in the given order
fn role_pair(first_role: &str, second_role: &str) -> String {
    let party = |roles: &str| {
        format!(
            r"{}{}\s*\([^)]*?(?:{})[^)]*\)",
            NAME, DESCRIPTOR, roles
        )
    };
    format!(
        r"(?i)\bbetween\s+{}\s*,?\s*and\s+{}",
        party(first_role),
        party(second_role)
    )
}

fn name_pair(caps: &Captures<'_>) -> Option<NamePair> {
    let first = normalize_party_name(caps.get(1)?.as_str());
    let second = normalize_party_name(caps.get(2)?.as_str());
    Some((first, second))
}

/// Strip a leading "the", trailing punctuation, and surrounding whitespace.
pub fn normalize_party_name(raw: &str) -> String {
    let without_article = LEADING_ARTICLE.replace(raw.trim(), "");
    without_article
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .trim()
        .to_string()
}

/// Infers the contracting parties from contract text or the base summary
#[derive(Debug, Clone)]
pub struct PartyExtractor {
    min_name_chars: usize,
}

impl Default for PartyExtractor {
    fn default() -> Self {
        Self::new(&SummaryConfig::default())
    }
}

impl PartyExtractor {
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            min_name_chars: config.min_party_name_chars,
        }
    }

    /// Text-derived parties if found, else summary-derived, else `None`.
    pub fn extract(&self, merge: &MergeResult) -> Option<ExtractedParties> {
        if let Some(text) = merge.final_contract_text() {
            if let Some(parties) = self.run(&PARTY_RULES, text, PartySource::TextDerived) {
                return Some(parties);
            }
        }

        let summary = merge.base_summary_text()?;
        self.run(&SUMMARY_PARTY_RULES, summary, PartySource::SummaryDerived)
    }

    fn run(
        &self,
        rules: &PatternCascade<NamePair>,
        text: &str,
        source: PartySource,
    ) -> Option<ExtractedParties> {
        let hit = rules.resolve(text, Scan::FirstMatch, |(first, second)| {
            self.is_usable(first) && self.is_usable(second)
        })?;

        tracing::debug!(rule = hit.rule_id, %source, "parties extracted");
        let (first, second) = hit.value;
        Some(Sourced::new(vec![first, second], source))
    }

    fn is_usable(&self, name: &str) -> bool {
        name.chars().count() >= self.min_name_chars
    }
}
