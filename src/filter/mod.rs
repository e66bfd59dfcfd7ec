//! Filtering capabilities for encounter tables
//!
//! Filters narrow a table by the values selected per categorical column.
//! An empty selection for a column is a pass-through, never "exclude all".
//! Filtering always produces a derived table; the source is left untouched.

pub mod category;
pub mod core;
pub mod selection;

pub use self::category::{CategoryFilter, is_all_marker};
pub use self::core::{AllFilter, AnyFilter, EncounterFilter, NotFilter, SharedFilter};
pub use self::selection::{FILTER_COLUMNS, FilterSelection, filter_options};
