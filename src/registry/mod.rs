//! Register definitions and loaders for the pipeline's tabular inputs
//!
//! This module contains one register definition per input table, with a
//! unified interface for loading TSV extracts and converting them into
//! typed records.
//!
//! Available registers:
//! - Patients: demographic and vital-status information
//! - Admissions: hospital admission (diagnosis) events
//! - Trajectories: ordered four-code disease trajectories

use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use log::info;

use crate::error::Result;
use crate::reader::read_tsv;

/// Base trait for register loaders
pub trait RegisterLoader {
    /// Typed record produced by this register
    type Model;

    /// Get the name of the register
    fn register_name(&self) -> &'static str;

    /// Get the Arrow schema the register's TSV extract must satisfy
    fn schema(&self) -> SchemaRef;

    /// Convert a record batch into typed records
    ///
    /// Rows with a null key field are skipped; the join stages downstream
    /// drop unmatched rows anyway, so a keyless row can never contribute.
    fn to_models(&self, batch: &RecordBatch) -> Result<Vec<Self::Model>>;

    /// Load a TSV extract and convert every row
    fn load(&self, path: &Path) -> Result<Vec<Self::Model>> {
        let batches = read_tsv(path, self.schema())?;

        let mut models = Vec::new();
        for batch in &batches {
            models.extend(self.to_models(batch)?);
        }

        info!(
            "Loaded {} {} records from {}",
            models.len(),
            self.register_name(),
            path.display()
        );

        Ok(models)
    }
}

// Register implementations
pub mod admissions;
pub mod patients;
pub mod trajectories;

pub use admissions::AdmissionRegister;
pub use patients::PatientRegister;
pub use trajectories::TrajectoryRegister;
