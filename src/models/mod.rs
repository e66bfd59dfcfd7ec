//! Domain models for the encounter dashboard
//!
//! This module contains the encounter record in its raw and prepared
//! forms, the age bracket type and the categorical column accessors.

pub mod column;
pub mod encounter;
pub mod types;

// Re-export commonly used types
pub use column::CategoricalColumn;
pub use encounter::{Encounter, EncounterRow, RawEncounter};
pub use types::AgeBracket;
