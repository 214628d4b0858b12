//! Source tags and the value-plus-source record.

use serde::{Deserialize, Serialize};

/// A derived value paired with where it came from.
///
/// Value and source travel together so the pairing cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sourced<T, S> {
    pub value: T,
    pub source: S,
}

impl<T, S> Sourced<T, S> {
    pub fn new(value: T, source: S) -> Self {
        Self { value, source }
    }
}

/// Where the party list came from.
///
/// The three tags carry different trust levels; consumers display them
/// distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartySource {
    /// Supplied directly by the merge result
    Explicit,
    /// Matched in the unified contract text
    TextDerived,
    /// Matched in the base contract summary
    SummaryDerived,
}

impl PartySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::TextDerived => "text-derived",
            Self::SummaryDerived => "summary-derived",
        }
    }

    /// Short badge label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Explicit => "Explicit",
            Self::TextDerived => "From contract text",
            Self::SummaryDerived => "From summary",
        }
    }
}

/// Where the effective date range came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateSource {
    /// Dates recorded in the document incorporation log
    LogDerived,
    /// A drafting phrase in the contract text; the end date is a placeholder
    TextDerived,
}

impl DateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LogDerived => "log-derived",
            Self::TextDerived => "text-derived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LogDerived => "From incorporation log",
            Self::TextDerived => "From contract text",
        }
    }
}

/// How the narrative was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativeSource {
    /// The AI-authored final summary, verbatim
    AiSummary,
    /// Assembled from the base summary and change data
    Synthesized,
    /// Nothing to work with; only the sentinel text
    Sentinel,
}

impl NarrativeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiSummary => "ai-summary",
            Self::Synthesized => "synthesized",
            Self::Sentinel => "sentinel",
        }
    }
}

macro_rules! source_tag_traits {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $ty::$variant.as_str() {
                        return Ok($ty::$variant);
                    }
                )+
                Err(format!("unknown {}: {}", stringify!($ty), s))
            }
        }
    };
}

source_tag_traits!(PartySource { Explicit, TextDerived, SummaryDerived });
source_tag_traits!(DateSource { LogDerived, TextDerived });
source_tag_traits!(NarrativeSource { AiSummary, Synthesized, Sentinel });
