//! Patient register definition
//!
//! The patient extract holds one row per patient: identifier, birth date,
//! vital-status date, and the status code (90 = dead).

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use log::warn;

use crate::error::Result;
use crate::models::Patient;
use crate::registry::RegisterLoader;
use crate::utils::arrow::{extract_date32, extract_int32, extract_string};

/// Loader for the patient register
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientRegister;

impl RegisterLoader for PatientRegister {
    type Model = Patient;

    fn register_name(&self) -> &'static str {
        "patients"
    }

    fn schema(&self) -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("PNR", DataType::Utf8, false),
            Field::new("BIRTH_DATE", DataType::Date32, true),
            Field::new("STATUS_DATE", DataType::Date32, true),
            Field::new("STATUS", DataType::Int32, true),
        ]))
    }

    fn to_models(&self, batch: &RecordBatch) -> Result<Vec<Patient>> {
        let mut patients = Vec::with_capacity(batch.num_rows());

        for row in 0..batch.num_rows() {
            let Some(pnr) = extract_string(batch, row, "PNR")? else {
                warn!("Skipping patient row {row} with empty PNR");
                continue;
            };
            let Some(birth_date) = extract_date32(batch, row, "BIRTH_DATE")? else {
                warn!("Skipping patient {pnr} with missing birth date");
                continue;
            };
            let Some(status_date) = extract_date32(batch, row, "STATUS_DATE")? else {
                warn!("Skipping patient {pnr} with missing status date");
                continue;
            };
            let Some(status) = extract_int32(batch, row, "STATUS")? else {
                warn!("Skipping patient {pnr} with missing status code");
                continue;
            };

            patients.push(Patient::new(pnr, birth_date, status_date, status));
        }

        Ok(patients)
    }
}
