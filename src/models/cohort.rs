//! Cohort entities derived from the patient and admission registers

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::utils::dates::round_one_decimal;

/// A patient retained by the cohort inclusion criteria
///
/// Ages are elapsed years at one-decimal precision; `outcome` is 1 if the
/// patient died within the follow-up window after diagnosis, 0 otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortEntry {
    /// Patient identifier
    pub pnr: String,
    /// Age at the earliest qualifying admission, in years
    pub age_at_diagnosis: f64,
    /// Age at the recorded vital status, in years
    pub age_at_status: f64,
    /// Binary outcome label (1 = died within the follow-up window)
    pub outcome: u8,
}

impl CohortEntry {
    /// Elapsed time between diagnosis and the status date, in years
    #[must_use]
    pub fn follow_up_years(&self) -> f64 {
        round_one_decimal(self.age_at_status - self.age_at_diagnosis)
    }
}

/// The filtered set of patients eligible for the study
///
/// Holds one entry per retained patient, in patient-register order.
#[derive(Debug, Clone, Default)]
pub struct Cohort {
    entries: Vec<CohortEntry>,
}

impl Cohort {
    /// Create a cohort from its entries
    #[must_use]
    pub const fn new(entries: Vec<CohortEntry>) -> Self {
        Self { entries }
    }

    /// Entries in patient-register order
    #[must_use]
    pub fn entries(&self) -> &[CohortEntry] {
        &self.entries
    }

    /// Number of patients in the cohort
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cohort is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set of patient identifiers in the cohort
    #[must_use]
    pub fn pnr_set(&self) -> FxHashSet<&str> {
        self.entries.iter().map(|entry| entry.pnr.as_str()).collect()
    }

    /// Outcome label per patient identifier
    #[must_use]
    pub fn outcomes_by_pnr(&self) -> FxHashMap<&str, u8> {
        self.entries
            .iter()
            .map(|entry| (entry.pnr.as_str(), entry.outcome))
            .collect()
    }

    /// Number of patients with outcome 1
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.outcome == 1).count()
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cohort Summary:")?;
        writeln!(f, "  Patients: {}", self.len())?;
        writeln!(f, "  Deaths within follow-up window: {}", self.positive_count())?;
        Ok(())
    }
}
