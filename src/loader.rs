//! Encounter table loading and export
//!
//! A configured source extract is read into record batches, conformed to
//! the raw encounter schema and prepared. When the extract does not exist
//! the table is generated instead.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use arrow::record_batch::RecordBatch;

use crate::algorithm::generator::EncounterGenerator;
use crate::algorithm::preparation::{PreparationOptions, PreparationReport, Preparer};
use crate::collections::EncounterTable;
use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::models::RawEncounter;
use crate::utils::arrow::conform_to_schema;
use crate::utils::io::{FileFormat, read_csv, read_parquet, write_csv, write_parquet};
use crate::utils::logging::log_warning;

/// Where a loaded table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Read from a CSV or Parquet extract
    File(PathBuf),
    /// Generated because no extract was found
    Synthetic,
    /// Supplied directly by the caller
    InMemory,
}

/// A prepared table together with its provenance
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// The prepared encounters
    pub table: EncounterTable,
    /// Where the rows came from
    pub source: DataSource,
    /// Corrections applied during preparation
    pub report: PreparationReport,
}

/// Read raw encounters from a CSV or Parquet file
///
/// Extra columns are ignored and missing ones are read as all-null.
pub fn read_raw_encounters(path: &Path, batch_size: usize) -> Result<Vec<RawEncounter>> {
    let batches = match FileFormat::from_path(path) {
        FileFormat::Csv => read_csv(path, batch_size)?,
        FileFormat::Parquet => read_parquet(path, batch_size)?,
    };

    let schema = Arc::new(RawEncounter::schema());
    let mut rows = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in &batches {
        let conformed = conform_to_schema(batch, &schema)
            .with_context(|| format!("Failed to normalize columns of {}", path.display()))?;
        rows.extend(RawEncounter::from_record_batch(&conformed)?);
    }
    Ok(rows)
}

/// Load the configured extract, or generate synthetic encounters when it is missing
pub fn load_encounters(config: &DashboardConfig) -> Result<LoadedDataset> {
    let path = &config.source_path;
    let (raw, source) = if path.is_file() {
        (
            read_raw_encounters(path, config.batch_size)?,
            DataSource::File(path.clone()),
        )
    } else {
        log_warning("Source extract not found, generating synthetic encounters", Some(path));
        (
            EncounterGenerator::new(config).generate(config.synthetic_records),
            DataSource::Synthetic,
        )
    };

    let mut preparer = Preparer::new(PreparationOptions::from(config));
    let (table, report) = preparer.prepare_with_report(&raw);

    Ok(LoadedDataset {
        table,
        source,
        report,
    })
}

/// Write a table as CSV with the export schema
pub fn export_csv(table: &EncounterTable, path: &Path) -> Result<()> {
    let batch = export_batch(table, path)?;
    write_csv(path, &batch)
}

/// Write a table as Parquet with the export schema
pub fn export_parquet(table: &EncounterTable, path: &Path) -> Result<()> {
    let batch = export_batch(table, path)?;
    write_parquet(path, &batch)
}

/// Write a table in the format implied by the file extension
pub fn export_table(table: &EncounterTable, path: &Path) -> Result<()> {
    match FileFormat::from_path(path) {
        FileFormat::Csv => export_csv(table, path),
        FileFormat::Parquet => export_parquet(table, path),
    }
}

fn export_batch(table: &EncounterTable, path: &Path) -> Result<RecordBatch> {
    table.to_record_batch().map_err(|e| {
        Error::Export {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
        .into()
    })
}
