//! Pactum: Contract Semantic Extraction & Summary Synthesis
//!
//! Derives a normalized, display-ready summary from the output of an upstream
//! document-merge step: the contract's effective date range, the contracting
//! parties, and a narrative of changes. Every derived field records where it
//! came from.
//!
//! # Core Concepts
//!
//! - **MergeResult**: loosely structured input; any field may be missing
//! - **Cascades**: ordered extraction strategies, first success wins
//! - **Provenance**: each field carries a source tag (`explicit`,
//!   `text-derived`, `summary-derived`, `log-derived`)
//! - **Totality**: extraction never fails; missing data is `None`
//!
//! # Example
//!
//! ```
//! use pactum::{build_summary, MergeResult, PartySource};
//!
//! let merge = MergeResult {
//!     parties: Some(vec!["Acme Corp".into(), "Beta LLC".into()]),
//!     ..Default::default()
//! };
//!
//! let summary = build_summary(&merge);
//! assert_eq!(summary.parties_source(), Some(PartySource::Explicit));
//! assert!(!summary.narrative().is_empty());
//! ```

pub mod analysis;
mod error;
pub mod merge;
pub mod provenance;
mod summary;

pub use analysis::{
    build_summary, extract_dates, extract_parties, synthesize_narrative, DateRange,
    ExtractedDates, ExtractedParties, SummaryAssembler, SummaryConfig,
};
pub use error::{PactumError, PactumResult};
pub use merge::{AmendmentSummary, ChangeType, ClauseChange, IncorporationEntry, MergeResult};
pub use provenance::{DateSource, NarrativeSource, PartySource, Sourced};
pub use summary::{ContractSummary, SummaryView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
