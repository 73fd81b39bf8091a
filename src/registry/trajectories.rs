//! Trajectory register definition
//!
//! The trajectory extract holds one row per patient per trajectory
//! instance: identifier plus four ordered disease-code slots.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use log::warn;

use crate::error::Result;
use crate::models::{TRAJECTORY_LEN, TrajectoryRecord};
use crate::registry::RegisterLoader;
use crate::utils::arrow::extract_string;

/// Column names of the ordered disease-code slots
pub const DISEASE_COLUMNS: [&str; TRAJECTORY_LEN] =
    ["DISEASE1", "DISEASE2", "DISEASE3", "DISEASE4"];

/// Loader for the trajectory register
#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryRegister;

impl RegisterLoader for TrajectoryRegister {
    type Model = TrajectoryRecord;

    fn register_name(&self) -> &'static str {
        "trajectories"
    }

    fn schema(&self) -> SchemaRef {
        let mut fields = vec![Field::new("PNR", DataType::Utf8, false)];
        for column in DISEASE_COLUMNS {
            fields.push(Field::new(column, DataType::Utf8, true));
        }
        Arc::new(Schema::new(fields))
    }

    fn to_models(&self, batch: &RecordBatch) -> Result<Vec<TrajectoryRecord>> {
        let mut records = Vec::with_capacity(batch.num_rows());

        'rows: for row in 0..batch.num_rows() {
            let Some(pnr) = extract_string(batch, row, "PNR")? else {
                warn!("Skipping trajectory row {row} with empty PNR");
                continue;
            };

            let mut codes: [String; TRAJECTORY_LEN] = Default::default();
            for (slot, column) in DISEASE_COLUMNS.iter().enumerate() {
                let Some(code) = extract_string(batch, row, column)? else {
                    warn!("Skipping trajectory for {pnr} with empty {column}");
                    continue 'rows;
                };
                codes[slot] = code;
            }

            records.push(TrajectoryRecord::new(pnr, codes));
        }

        Ok(records)
    }
}
