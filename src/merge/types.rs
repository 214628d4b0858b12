//! Input types for the merge result

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Output of the upstream document-merge step.
///
/// Read-only input to the extraction core. Unknown fields are ignored, and
/// both snake_case and camelCase field names are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    /// Full text of the unified contract
    #[serde(default, alias = "finalContract")]
    pub final_contract: Option<String>,

    /// AI-authored narrative summary
    #[serde(default, alias = "finalSummary")]
    pub final_summary: Option<String>,

    /// Narrative summary of the original, pre-amendment contract
    #[serde(default, alias = "baseSummary")]
    pub base_summary: Option<String>,

    /// Per-amendment change descriptions, in application order
    #[serde(default, alias = "amendmentSummaries", deserialize_with = "null_as_empty")]
    pub amendment_summaries: Vec<AmendmentSummary>,

    #[serde(default, alias = "clauseChangeLog", deserialize_with = "null_as_empty")]
    pub clause_change_log: Vec<ClauseChange>,

    /// Entries shaped `"<filename> (<role>, <date-text>)"`
    #[serde(
        default,
        alias = "documentIncorporationLog",
        deserialize_with = "null_as_empty"
    )]
    pub document_incorporation_log: Vec<String>,

    /// Explicit party names; authoritative when non-empty
    #[serde(default)]
    pub parties: Option<Vec<String>>,
}

impl MergeResult {
    /// Contract text, if present and not blank
    pub fn final_contract_text(&self) -> Option<&str> {
        non_blank(&self.final_contract)
    }

    /// AI summary, if present and not blank
    pub fn final_summary_text(&self) -> Option<&str> {
        non_blank(&self.final_summary)
    }

    /// Base summary, if present and not blank
    pub fn base_summary_text(&self) -> Option<&str> {
        non_blank(&self.base_summary)
    }

    /// Explicit party names with blank entries dropped.
    ///
    /// Returns `None` when the field is absent or holds no usable name.
    pub fn explicit_parties(&self) -> Option<Vec<String>> {
        let names: Vec<String> = self
            .parties
            .as_ref()?
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            None
        } else {
            Some(names)
        }
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.trim().is_empty())
}

/// Changes introduced by one amendment document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmendmentSummary {
    #[serde(default)]
    pub document: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub changes: Vec<String>,
}

impl AmendmentSummary {
    pub fn new(document: impl Into<String>, changes: Vec<String>) -> Self {
        Self {
            document: document.into(),
            changes,
        }
    }
}

/// Kind of change recorded against a clause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
    /// Anything the producer emitted that is not one of the three above
    #[default]
    #[serde(other)]
    Other,
}

/// One entry of the clause change log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClauseChange {
    #[serde(default, alias = "changeType")]
    pub change_type: ChangeType,

    /// Producer-specific fields (clause ids, before/after text, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ClauseChange {
    pub fn new(change_type: ChangeType) -> Self {
        Self {
            change_type,
            details: Map::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
