//! Parquet file operations
//!
//! Reading and writing encounter tables stored as Parquet.

use std::path::Path;

use anyhow::Context;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read a parquet file into Arrow record batches
pub fn read_parquet(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading parquet file", path);

    let file = safe_open_file(path, "reading encounter parquet")?;

    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("Failed to read parquet metadata of {}", path.display()))?
        .with_batch_size(batch_size)
        .build()
        .with_context(|| format!("Failed to build parquet reader for {}", path.display()))?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to decode parquet file {}", path.display()))?;

    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows, Some(start.elapsed()));

    Ok(batches)
}

/// Write a record batch to a parquet file
pub fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path)?;

    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)
        .with_context(|| format!("Failed to create parquet writer for {}", path.display()))?;
    writer
        .write(batch)
        .with_context(|| format!("Failed to write parquet file {}", path.display()))?;
    writer
        .close()
        .with_context(|| format!("Failed to finalize parquet file {}", path.display()))?;

    log_operation_complete("wrote", path, batch.num_rows(), None);
    Ok(())
}
