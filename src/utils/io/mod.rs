//! IO utilities for file operations
//!
//! Readers and writers for the CSV and Parquet encounter formats.

pub mod csv;
pub mod parquet;

use std::path::Path;

// Re-export commonly used functions for convenience
pub use self::csv::{DEFAULT_BATCH_SIZE, read_csv, write_csv};
pub use self::parquet::{read_parquet, write_parquet};

/// On-disk layout of an encounter table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl FileFormat {
    /// Format implied by the file extension; anything but `.parquet` is CSV
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => Self::Parquet,
            _ => Self::Csv,
        }
    }
}
