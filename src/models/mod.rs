//! Domain models for the cohort pipeline
//!
//! This module contains the typed records produced by the register loaders
//! and the derived cohort entities the pipeline stages operate on.

pub mod admission;
pub mod cohort;
pub mod patient;
pub mod trajectory;

pub use admission::Admission;
pub use cohort::{Cohort, CohortEntry};
pub use patient::{Patient, STATUS_DEAD};
pub use trajectory::{TRAJECTORY_LEN, Trajectory, TrajectoryRecord};
