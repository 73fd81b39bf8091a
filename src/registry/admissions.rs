//! Admission register definition
//!
//! The admission extract holds one row per admission event; a patient may
//! appear any number of times.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use log::warn;

use crate::error::Result;
use crate::models::Admission;
use crate::registry::RegisterLoader;
use crate::utils::arrow::{extract_date32, extract_string};

/// Loader for the admission register
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmissionRegister;

impl RegisterLoader for AdmissionRegister {
    type Model = Admission;

    fn register_name(&self) -> &'static str {
        "admissions"
    }

    fn schema(&self) -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("PNR", DataType::Utf8, false),
            Field::new("ADMISSION_DATE", DataType::Date32, true),
        ]))
    }

    fn to_models(&self, batch: &RecordBatch) -> Result<Vec<Admission>> {
        let mut admissions = Vec::with_capacity(batch.num_rows());

        for row in 0..batch.num_rows() {
            let Some(pnr) = extract_string(batch, row, "PNR")? else {
                warn!("Skipping admission row {row} with empty PNR");
                continue;
            };
            let Some(admission_date) = extract_date32(batch, row, "ADMISSION_DATE")? else {
                warn!("Skipping admission for {pnr} with missing date");
                continue;
            };

            admissions.push(Admission::new(pnr, admission_date));
        }

        Ok(admissions)
    }
}
