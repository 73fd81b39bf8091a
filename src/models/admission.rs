//! Hospital admission record

use chrono::NaiveDate;

/// A single hospital admission (diagnosis event) for a patient
///
/// A patient may have any number of admissions; only the earliest one is
/// used for age-at-diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    /// Patient identifier (foreign key into the patient register)
    pub pnr: String,
    /// Date of the admission
    pub admission_date: NaiveDate,
}

impl Admission {
    /// Create a new admission record
    #[must_use]
    pub const fn new(pnr: String, admission_date: NaiveDate) -> Self {
        Self {
            pnr,
            admission_date,
        }
    }
}
