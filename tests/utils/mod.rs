use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use cohort_builder::models::{Admission, Patient, TRAJECTORY_LEN, TrajectoryRecord};

/// Create a scratch directory for a test, unique per process and test name
#[must_use]
pub fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cohort_builder_{}_{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a TSV fixture file and return its path
pub fn write_tsv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Shorthand for building a date in fixtures
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Shorthand for building a patient record in fixtures
#[must_use]
pub fn patient(pnr: &str, birth: NaiveDate, status_date: NaiveDate, status: i32) -> Patient {
    Patient::new(pnr.to_string(), birth, status_date, status)
}

/// Shorthand for building an admission record in fixtures
#[must_use]
pub fn admission(pnr: &str, admitted: NaiveDate) -> Admission {
    Admission::new(pnr.to_string(), admitted)
}

/// Shorthand for building a trajectory row in fixtures
#[must_use]
pub fn trajectory(pnr: &str, codes: [&str; TRAJECTORY_LEN]) -> TrajectoryRecord {
    TrajectoryRecord::new(pnr.to_string(), codes.map(str::to_string))
}
