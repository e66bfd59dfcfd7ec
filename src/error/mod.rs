//! Error handling for the encounter dashboard.
//!
//! Typed failures live in [`Error`]; everything else flows through
//! `anyhow` so that I/O boundaries can attach context.

use std::path::PathBuf;

pub mod util;

/// Specialized error type for loading, converting and exporting encounters
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file exists but could not be read
    #[error("Failed to read encounter source {path}: {message}")]
    SourceRead {
        /// Path of the source file
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// A required column is absent from a record batch
    #[error("Column '{column}' not found")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// Converting between record batches and records failed
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Writing the filtered table failed
    #[error("Export to {path} failed: {message}")]
    Export {
        /// Destination path
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// The configuration file is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type used across the crate
pub type Result<T> = anyhow::Result<T>;
