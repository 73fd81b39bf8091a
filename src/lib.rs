//! A Rust library for building labeled disease-trajectory feature datasets
//! for 5-year mortality prediction from registry-style TSV extracts.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;
pub mod registry;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use models::{Admission, Cohort, CohortEntry, Patient, Trajectory, TrajectoryRecord};

// Pipeline stages
pub use algorithm::builder::{DatasetBuilder, StudyDataset};
pub use algorithm::cohort::CohortBuilder;
pub use algorithm::dataset::{DatasetAssembler, LabeledMatrix, TrainTestSplit};
pub use algorithm::encoding::{FeatureMatrix, TrajectoryCatalog, TrajectoryEncoder};

// Register loaders
pub use registry::{AdmissionRegister, PatientRegister, RegisterLoader, TrajectoryRegister};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;
