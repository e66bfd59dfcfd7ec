//! Data engine of a clinical-encounter analytics dashboard.
//!
//! Loads or generates encounter records, prepares them, narrows them with
//! sidebar-style categorical filters and computes the KPI cards, chart
//! series and word frequencies a dashboard page renders.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use collections::EncounterTable;
pub use models::{AgeBracket, CategoricalColumn, Encounter, RawEncounter};

// Dashboard
pub use dashboard::{DashboardView, Render, Session};

// Filtering capabilities
pub use filter::{EncounterFilter, FilterSelection, filter_options};

// Aggregations
pub use algorithm::{Kpis, MODE_SENTINEL, ValueCount, term_frequencies};

// Loading and export
pub use loader::{DataSource, export_csv, export_parquet, export_table, load_encounters};
