//! CSV file operations
//!
//! Source extracts are read with every column as a nullable string so that
//! identifiers and dates reach the preparer untouched by type inference.

use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Default number of rows per batch when reading CSV
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Number of records scanned to discover the header layout
const SCHEMA_SCAN_RECORDS: usize = 100;

/// Read a CSV file with a header row into string-typed record batches
pub fn read_csv(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading CSV file", path);

    let mut file = safe_open_file(path, "reading encounter CSV")?;

    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, Some(SCHEMA_SCAN_RECORDS))
        .with_context(|| format!("Failed to read CSV header of {}", path.display()))?;

    let schema = Schema::new(
        inferred
            .fields()
            .iter()
            .map(|field| Field::new(field.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );

    file.rewind()
        .with_context(|| format!("Failed to rewind {}", path.display()))?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(true)
        .with_batch_size(batch_size)
        .build(file)
        .with_context(|| format!("Failed to build CSV reader for {}", path.display()))?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse CSV file {}", path.display()))?;

    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows, Some(start.elapsed()));

    Ok(batches)
}

/// Write a record batch as CSV with a header row
pub fn write_csv(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path)?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .build(BufWriter::new(file));
    writer
        .write(batch)
        .with_context(|| format!("Failed to write CSV file {}", path.display()))?;
    writer
        .into_inner()
        .flush()
        .with_context(|| format!("Failed to flush CSV file {}", path.display()))?;

    log_operation_complete("wrote", path, batch.num_rows(), None);
    Ok(())
}
