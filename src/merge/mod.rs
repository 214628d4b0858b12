//! The upstream merge result, as this crate receives it
//!
//! A `MergeResult` is produced by the document-merge pipeline and handed to
//! the extraction core read-only. Every field is optional: producers differ in
//! what they fill in, and `null`, missing, and empty all read as "no data".

mod incorporation;
mod load;
mod types;

pub use incorporation::IncorporationEntry;
pub use types::{AmendmentSummary, ChangeType, ClauseChange, MergeResult};
