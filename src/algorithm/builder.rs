//! Step-by-step construction of a study dataset
//!
//! This module contains the central orchestration: load the three register
//! extracts, build the cohort, encode trajectories, and assemble the split
//! dataset.

use std::fmt;
use std::path::Path;

use log::info;

use crate::algorithm::cohort::CohortBuilder;
use crate::algorithm::dataset::{DatasetAssembler, TrainTestSplit};
use crate::algorithm::encoding::{TrajectoryCatalog, TrajectoryEncoder};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{Admission, Cohort, Patient, TrajectoryRecord};
use crate::registry::{AdmissionRegister, PatientRegister, RegisterLoader, TrajectoryRegister};

/// A fully assembled study dataset
#[derive(Debug, Clone)]
pub struct StudyDataset {
    /// Configuration used to build this dataset
    pub config: PipelineConfig,
    /// The retained cohort with ages and outcomes
    pub cohort: Cohort,
    /// The universe of unique trajectories behind the feature columns
    pub catalog: TrajectoryCatalog,
    /// Train/test partitions of the labeled feature matrix
    pub split: TrainTestSplit,
}

impl fmt::Display for StudyDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Study Dataset:")?;
        writeln!(f, "  Cohort Patients: {}", self.cohort.len())?;
        writeln!(f, "  Unique Trajectories: {}", self.catalog.len())?;
        write!(f, "{}", self.split)?;
        Ok(())
    }
}

/// Builder for constructing a study dataset step by step
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    /// Configuration for the dataset being built
    config: PipelineConfig,
    /// Patient records keyed for the cohort join
    patients: Vec<Patient>,
    /// Admission records for age-at-diagnosis
    admissions: Vec<Admission>,
    /// Trajectory rows for the feature columns
    trajectories: Vec<TrajectoryRecord>,
}

impl DatasetBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline configuration
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use already-loaded patient records
    #[must_use]
    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    /// Use already-loaded admission records
    #[must_use]
    pub fn with_admissions(mut self, admissions: Vec<Admission>) -> Self {
        self.admissions = admissions;
        self
    }

    /// Use already-loaded trajectory records
    #[must_use]
    pub fn with_trajectories(mut self, trajectories: Vec<TrajectoryRecord>) -> Self {
        self.trajectories = trajectories;
        self
    }

    /// Load patient records from a TSV extract
    pub fn load_patients(mut self, path: &Path) -> Result<Self> {
        self.patients = PatientRegister.load(path)?;
        Ok(self)
    }

    /// Load admission records from a TSV extract
    pub fn load_admissions(mut self, path: &Path) -> Result<Self> {
        self.admissions = AdmissionRegister.load(path)?;
        Ok(self)
    }

    /// Load trajectory records from a TSV extract
    pub fn load_trajectories(mut self, path: &Path) -> Result<Self> {
        self.trajectories = TrajectoryRegister.load(path)?;
        Ok(self)
    }

    /// Run the pipeline and build the final dataset
    ///
    /// The stages run strictly in sequence: cohort construction, trajectory
    /// encoding, dataset assembly.
    pub fn build(self) -> Result<StudyDataset> {
        self.config.validate()?;

        info!(
            "Building dataset from {} patients, {} admissions, {} trajectory rows",
            self.patients.len(),
            self.admissions.len(),
            self.trajectories.len()
        );

        let cohort = CohortBuilder::from_config(&self.config).build(&self.patients, &self.admissions);

        let encoder = TrajectoryEncoder::new(self.config.include_patients_without_trajectories);
        let (catalog, features) = encoder.encode(&self.trajectories, &cohort);

        let split = DatasetAssembler::from_config(&self.config).assemble(&features, &cohort)?;

        Ok(StudyDataset {
            config: self.config,
            cohort,
            catalog,
            split,
        })
    }
}
