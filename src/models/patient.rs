//! Patient demographic and vital-status record

use chrono::NaiveDate;

/// Status code recorded for a dead patient
pub const STATUS_DEAD: i32 = 90;

/// Demographic and vital-status record for a single patient
///
/// One row per patient in the patient register; `status_date` is the date
/// the vital status was last assessed (date of death for dead patients,
/// end of follow-up otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Unique patient identifier
    pub pnr: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Date the vital status was recorded
    pub status_date: NaiveDate,
    /// Vital status code (90 = dead)
    pub status: i32,
}

impl Patient {
    /// Create a new patient record
    #[must_use]
    pub const fn new(
        pnr: String,
        birth_date: NaiveDate,
        status_date: NaiveDate,
        status: i32,
    ) -> Self {
        Self {
            pnr,
            birth_date,
            status_date,
            status,
        }
    }

    /// Whether the patient was recorded dead at the status date
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.status == STATUS_DEAD
    }
}
