//! Cohort construction
//!
//! Joins the patient register with the admission register, derives ages at
//! one-decimal precision, applies the inclusion criteria, and labels the
//! binary outcome.

use chrono::NaiveDate;
use log::info;
use rustc_hash::FxHashMap;

use crate::config::PipelineConfig;
use crate::models::{Admission, Cohort, CohortEntry, Patient};
use crate::utils::dates::{round_one_decimal, years_between};
use crate::utils::progress;

/// Builds the study cohort from patient and admission records
#[derive(Debug, Clone)]
pub struct CohortBuilder {
    /// Maximum age at diagnosis, exclusive
    max_age_at_diagnosis: f64,
    /// Follow-up window in years, exclusive at the boundary
    follow_up_years: f64,
}

impl CohortBuilder {
    /// Create a builder with explicit inclusion thresholds
    #[must_use]
    pub const fn new(max_age_at_diagnosis: f64, follow_up_years: f64) -> Self {
        Self {
            max_age_at_diagnosis,
            follow_up_years,
        }
    }

    /// Create a builder from a pipeline configuration
    #[must_use]
    pub const fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.max_age_at_diagnosis, config.follow_up_years)
    }

    /// Build the cohort
    ///
    /// Patients without an admission record are silently dropped (inner-join
    /// semantics). A patient with several admissions is diagnosed at the
    /// earliest one, so the cohort holds at most one entry per patient.
    ///
    /// A patient is retained when age at diagnosis is under the maximum and
    /// either the follow-up exceeds the window or the patient died. The
    /// outcome is 1 exactly when the patient died with follow-up shorter
    /// than the window.
    #[must_use]
    pub fn build(&self, patients: &[Patient], admissions: &[Admission]) -> Cohort {
        let first_admissions = earliest_admission_by_pnr(admissions);

        let pb = progress::create_progress_bar(patients.len() as u64, Some("Building cohort"));

        let mut entries = Vec::new();
        let mut without_admission = 0usize;

        for patient in patients {
            pb.inc(1);

            let Some(&admission_date) = first_admissions.get(patient.pnr.as_str()) else {
                without_admission += 1;
                continue;
            };

            let age_at_diagnosis = years_between(patient.birth_date, admission_date);
            let age_at_status = years_between(patient.birth_date, patient.status_date);
            let follow_up = round_one_decimal(age_at_status - age_at_diagnosis);

            if age_at_diagnosis >= self.max_age_at_diagnosis {
                continue;
            }
            // Censored without the window closing: outcome would be ambiguous
            if follow_up <= self.follow_up_years && !patient.is_dead() {
                continue;
            }

            let outcome = u8::from(follow_up < self.follow_up_years && patient.is_dead());

            entries.push(CohortEntry {
                pnr: patient.pnr.clone(),
                age_at_diagnosis,
                age_at_status,
                outcome,
            });
        }

        progress::finish_progress_bar(&pb, Some("Cohort complete"));

        info!(
            "Cohort: retained {} of {} patients ({} without admissions, {} excluded by criteria)",
            entries.len(),
            patients.len(),
            without_admission,
            patients.len() - entries.len() - without_admission
        );

        Cohort::new(entries)
    }
}

/// Earliest admission date per patient identifier
fn earliest_admission_by_pnr(admissions: &[Admission]) -> FxHashMap<&str, NaiveDate> {
    let mut first: FxHashMap<&str, NaiveDate> = FxHashMap::default();

    for admission in admissions {
        first
            .entry(admission.pnr.as_str())
            .and_modify(|date| {
                if admission.admission_date < *date {
                    *date = admission.admission_date;
                }
            })
            .or_insert(admission.admission_date);
    }

    first
}
