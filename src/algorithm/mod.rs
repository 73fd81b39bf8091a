//! Pipeline algorithms
//!
//! The stages run strictly in sequence: cohort construction, trajectory
//! encoding, then dataset assembly. `builder` ties them together behind a
//! single entry point.

pub mod builder;
pub mod cohort;
pub mod dataset;
pub mod encoding;

pub use builder::{DatasetBuilder, StudyDataset};
pub use cohort::CohortBuilder;
pub use dataset::{DatasetAssembler, LabeledMatrix, TrainTestSplit};
pub use encoding::{FeatureMatrix, TrajectoryCatalog, TrajectoryEncoder};
