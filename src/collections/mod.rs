//! Model collections
//!
//! The encounter table is the tabular type every component works on:
//! the preparer builds it, the filters derive sub-tables from it and the
//! aggregations read it.

pub mod encounter;

pub use encounter::EncounterTable;
