//! Utilities for working with Arrow arrays.
//!
//! Source files arrive with whatever column types the CSV inference or the
//! Parquet writer chose. These helpers bring a batch onto a fixed string
//! schema so it can be deserialized into raw records.

use std::sync::Arc;

use anyhow::Context;
use arrow::array::{Array, ArrayRef, new_null_array};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::error::{Error, Result};

/// Get a column from a record batch, cast to the expected type
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The expected data type for the column
/// * `required` - Whether the column is required (error if missing) or optional (None if missing)
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary) if found
/// * `Ok(None)` - If the column is not found and `required` is false
/// * `Err(Error)` - If the column is not found and `required` is true
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
) -> Result<Option<ArrayRef>> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        if required {
            return Err(Error::ColumnNotFound {
                column: column_name.to_string(),
            }
            .into());
        }
        warn!("Column '{column_name}' not found in record batch");
        return Ok(None);
    };

    let column = batch.column(idx);
    let actual_type = column.data_type();

    if actual_type == expected_type {
        return Ok(Some(Arc::clone(column)));
    }

    debug!("Converting column '{column_name}' from {actual_type:?} to {expected_type:?}");

    let converted = match cast(column, expected_type) {
        Ok(converted) => converted,
        Err(err) => {
            // An unconvertible column is treated as missing values
            warn!("Failed to convert column '{column_name}' to {expected_type:?}: {err}");
            new_null_array(expected_type, batch.num_rows())
        }
    };

    Ok(Some(converted))
}

/// Project a batch onto `schema`, casting each column to the target type
///
/// Columns absent from the batch become all-null, columns not named by the
/// schema are dropped.
pub fn conform_to_schema(batch: &RecordBatch, schema: &Arc<Schema>) -> Result<RecordBatch> {
    let columns = schema
        .fields()
        .iter()
        .map(|field| {
            get_column(batch, field.name(), field.data_type(), false).map(|column| {
                column.unwrap_or_else(|| new_null_array(field.data_type(), batch.num_rows()))
            })
        })
        .collect::<Result<Vec<ArrayRef>>>()?;

    RecordBatch::try_new(Arc::clone(schema), columns)
        .with_context(|| "Failed to build record batch with the encounter schema")
}
