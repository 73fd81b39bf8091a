//! Configuration for the cohort pipeline.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum age at diagnosis for cohort inclusion, exclusive
    pub max_age_at_diagnosis: f64,
    /// Follow-up window in years; drives both the inclusion rule and the
    /// outcome label, exclusive at the boundary in both directions
    pub follow_up_years: f64,
    /// Fraction of distinct patients sampled into the training partition
    pub train_fraction: f64,
    /// Seed for the train/test split; `None` draws from OS entropy
    pub random_seed: Option<u64>,
    /// Emit an all-zero feature row for cohort patients with no trajectory
    /// rows instead of dropping them
    pub include_patients_without_trajectories: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_age_at_diagnosis: 65.0,
            follow_up_years: 5.0,
            train_fraction: 0.7,
            random_seed: None,
            include_patients_without_trajectories: false,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are in range
    pub fn validate(&self) -> Result<()> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "train_fraction must be strictly between 0 and 1, got {}",
                self.train_fraction
            )));
        }
        if self.max_age_at_diagnosis <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_age_at_diagnosis must be positive, got {}",
                self.max_age_at_diagnosis
            )));
        }
        if self.follow_up_years <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "follow_up_years must be positive, got {}",
                self.follow_up_years
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Max Age at Diagnosis: {}", self.max_age_at_diagnosis)?;
        writeln!(f, "  Follow-up Window (years): {}", self.follow_up_years)?;
        writeln!(f, "  Train Fraction: {}", self.train_fraction)?;
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random Seed: {seed}")?;
        }
        writeln!(
            f,
            "  Include Patients Without Trajectories: {}",
            self.include_patients_without_trajectories
        )?;
        Ok(())
    }
}
