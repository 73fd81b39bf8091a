//! Utilities for working with Arrow arrays
//!
//! This module provides utility functions for safely extracting typed values
//! from Arrow record batches, with error handling for missing columns and
//! type mismatches.

use arrow::array::{Array, ArrayRef, Date32Array, Int32Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Get a column from a record batch, checking its declared type
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The Arrow data type the column must have
///
/// # Returns
///
/// * `Ok(ArrayRef)` - The column array
/// * `Err(Error)` - If the column is missing or has a different type
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
) -> Result<ArrayRef> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        return Err(Error::ColumnNotFound {
            column: column_name.to_string(),
        });
    };

    let column = batch.column(idx);
    if column.data_type() != expected_type {
        return Err(Error::TypeMismatch {
            column: column_name.to_string(),
            expected: format!("{expected_type:?}"),
        });
    }

    Ok(column.clone())
}

/// Downcast an array reference to a concrete Arrow array type
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| Error::TypeMismatch {
        column: column_name.to_string(),
        expected: type_name.to_string(),
    })
}

/// Extract a string value from a record batch
///
/// Returns `Ok(None)` if the cell is null or empty.
pub fn extract_string(
    batch: &RecordBatch,
    row: usize,
    column_name: &str,
) -> Result<Option<String>> {
    let array = get_column(batch, column_name, &DataType::Utf8)?;
    let string_array = downcast_array::<StringArray>(&array, column_name, "String")?;

    if row < string_array.len() && !string_array.is_null(row) {
        let value = string_array.value(row).to_string();
        if !value.is_empty() {
            return Ok(Some(value));
        }
    }

    Ok(None)
}

/// Extract a date value from a record batch (Date32 format)
///
/// Returns `Ok(None)` if the cell is null.
pub fn extract_date32(
    batch: &RecordBatch,
    row: usize,
    column_name: &str,
) -> Result<Option<NaiveDate>> {
    let array = get_column(batch, column_name, &DataType::Date32)?;
    let date_array = downcast_array::<Date32Array>(&array, column_name, "Date32")?;

    if row < date_array.len() && !date_array.is_null(row) {
        // Date32 stores days relative to 1970-01-01; the offset is signed
        // because birth dates routinely precede the epoch.
        let days_since_epoch = date_array.value(row);
        return Ok(NaiveDate::from_ymd_opt(1970, 1, 1).and_then(|epoch| {
            epoch.checked_add_signed(chrono::Duration::days(i64::from(days_since_epoch)))
        }));
    }

    Ok(None)
}

/// Extract an int32 value from a record batch
///
/// Returns `Ok(None)` if the cell is null.
pub fn extract_int32(
    batch: &RecordBatch,
    row: usize,
    column_name: &str,
) -> Result<Option<i32>> {
    let array = get_column(batch, column_name, &DataType::Int32)?;
    let int_array = downcast_array::<Int32Array>(&array, column_name, "Int32")?;

    if row < int_array.len() && !int_array.is_null(row) {
        return Ok(Some(int_array.value(row)));
    }

    Ok(None)
}
