//! Data-processing algorithms behind the dashboard
//!
//! Synthetic generation, preparation of raw rows, and the aggregations a
//! render pass computes over a filtered table.

pub mod aggregation;
pub mod generator;
pub mod preparation;
pub mod terms;

pub use aggregation::{Kpis, MODE_SENTINEL, ValueCount, mean, mode, top_n, value_counts};
pub use generator::EncounterGenerator;
pub use preparation::{PreparationOptions, PreparationReport, Preparer, compute_age};
pub use terms::{TermCounter, term_frequencies};
