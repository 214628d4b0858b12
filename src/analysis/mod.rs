//! Contract semantic extraction and summary synthesis
//!
//! Turns a [`MergeResult`](crate::merge::MergeResult) into a
//! [`ContractSummary`](crate::ContractSummary) in a single pass.
//!
//! # Architecture
//!
//! - **DateExtractor**: effective start/end dates from the incorporation log,
//!   falling back to drafting phrases in the contract text
//! - **PartyExtractor**: two contracting parties from the contract text,
//!   falling back to the base summary
//! - **NarrativeSynthesizer**: the AI summary verbatim, or a narrative built
//!   from the base summary and change data
//! - **SummaryAssembler**: runs all three, applies explicit-party precedence,
//!   and tags every field with its source
//!
//! Text matching goes through [`PatternCascade`]: an ordered table of
//! `(pattern, extraction fn)` rules where the first accepted value wins.
//!
//! Nothing here returns an error. A field that cannot be derived is `None`,
//! and the narrative falls back to a sentinel sentence.
//!
//! # Example
//!
//! ```
//! use pactum::analysis::SummaryAssembler;
//! use pactum::merge::MergeResult;
//!
//! let merge = MergeResult {
//!     document_incorporation_log: vec![
//!         "base.pdf (base, January 1, 2023)".to_string(),
//!         "amend1.pdf (amendment, June 15, 2023)".to_string(),
//!     ],
//!     ..Default::default()
//! };
//!
//! let summary = SummaryAssembler::new().build(&merge);
//! assert_eq!(summary.effective_start().unwrap().to_string(), "2023-01-01");
//! assert_eq!(summary.effective_end().unwrap().to_string(), "2023-06-15");
//! ```

mod assembler;
mod calendar;
mod cascade;
pub mod extractors;
mod types;

pub use assembler::{build_summary, SummaryAssembler};
pub use calendar::parse_calendar_date;
pub use cascade::{CascadeHit, ExtractFn, PatternCascade, PatternRule, Scan};
pub use extractors::{
    extract_dates, extract_parties, normalize_party_name, synthesize_narrative, DateExtractor,
    NarrativeSynthesizer, PartyExtractor,
};
pub use types::{
    DateRange, ExtractedDates, ExtractedParties, SummaryConfig, DEFAULT_SENTINEL_NARRATIVE,
};
