//! Provenance tags for derived summary fields.

pub mod types;

pub use types::{DateSource, NarrativeSource, PartySource, Sourced};
