//! Date arithmetic helpers
//!
//! Ages and follow-up durations are expressed as elapsed years rounded to
//! one decimal place, which is the precision the cohort rules are defined at.

use chrono::NaiveDate;

/// Average length of a calendar year in days, accounting for leap years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Elapsed time between two dates in years, rounded to one decimal place
///
/// Negative if `end` precedes `start`.
#[must_use]
pub fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let days = (end - start).num_days() as f64;
    round_one_decimal(days / DAYS_PER_YEAR)
}

/// Round a value to one decimal place
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
