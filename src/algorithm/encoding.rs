//! Trajectory deduplication and one-hot encoding
//!
//! Deduplicates the trajectory table into a catalog of unique trajectories,
//! collapses repeated (patient, trajectory) pairs into memberships, and
//! pivots the memberships into a wide binary feature matrix restricted to
//! cohort patients.

use log::info;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::models::{Cohort, TRAJECTORY_LEN, Trajectory, TrajectoryRecord};
use crate::utils::progress;

/// The universe of unique trajectories with stable synthetic identifiers
///
/// Identifiers are assigned 1.. in first-observed row order over the full
/// trajectory table. The catalog covers every unique trajectory observed,
/// whether or not any cohort patient carries it.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryCatalog {
    trajectories: Vec<Trajectory>,
    ids_by_codes: FxHashMap<[String; TRAJECTORY_LEN], u32>,
}

impl TrajectoryCatalog {
    /// Build the catalog by deduplicating the trajectory table on the four
    /// ordered code slots
    #[must_use]
    pub fn build(records: &[TrajectoryRecord]) -> Self {
        let mut catalog = Self::default();

        for record in records {
            if !catalog.ids_by_codes.contains_key(&record.codes) {
                let id = catalog.trajectories.len() as u32 + 1;
                catalog.ids_by_codes.insert(record.codes.clone(), id);
                catalog
                    .trajectories
                    .push(Trajectory::new(id, record.codes.clone()));
            }
        }

        catalog
    }

    /// Identifier of an exact four-slot code combination, if cataloged
    #[must_use]
    pub fn id_of(&self, codes: &[String; TRAJECTORY_LEN]) -> Option<u32> {
        self.ids_by_codes.get(codes).copied()
    }

    /// Unique trajectories in identifier order
    #[must_use]
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Column labels in identifier order ("T1", "T2", ...)
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        use itertools::Itertools;

        self.trajectories.iter().map(Trajectory::label).collect_vec()
    }

    /// Number of unique trajectories
    #[must_use]
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }
}

/// Wide binary feature table: one row per patient, one column per unique
/// trajectory
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    pnrs: Vec<String>,
    rows: Vec<Vec<u8>>,
}

impl FeatureMatrix {
    /// Column labels in catalog order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Patient identifiers, one per row
    #[must_use]
    pub fn pnrs(&self) -> &[String] {
        &self.pnrs
    }

    /// Feature rows, aligned with `pnrs`
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Number of patient rows
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of trajectory columns
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    /// Indicator value for a (row, column) position
    #[must_use]
    pub fn value(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }
}

/// One-hot encodes trajectory memberships for cohort patients
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryEncoder {
    /// Emit an all-zero row for cohort patients absent from the trajectory
    /// table instead of dropping them
    include_patients_without_trajectories: bool,
}

impl TrajectoryEncoder {
    /// Create an encoder
    #[must_use]
    pub const fn new(include_patients_without_trajectories: bool) -> Self {
        Self {
            include_patients_without_trajectories,
        }
    }

    /// Encode the trajectory table against a cohort
    ///
    /// The column universe is every unique trajectory in `records`; rows are
    /// cohort patients, in cohort order. A patient repeating the identical
    /// trajectory contributes one membership, not a count.
    #[must_use]
    pub fn encode(
        &self,
        records: &[TrajectoryRecord],
        cohort: &Cohort,
    ) -> (TrajectoryCatalog, FeatureMatrix) {
        let catalog = TrajectoryCatalog::build(records);
        info!(
            "Cataloged {} unique trajectories from {} rows",
            catalog.len(),
            records.len()
        );

        let pb = progress::create_progress_bar(records.len() as u64, Some("Encoding trajectories"));

        // Membership per patient over the full table; repeated pairs collapse
        let mut memberships: FxHashMap<&str, SmallVec<[u32; 8]>> = FxHashMap::default();
        for record in records {
            pb.inc(1);
            if let Some(id) = catalog.id_of(&record.codes) {
                let ids = memberships.entry(record.pnr.as_str()).or_default();
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }

        progress::finish_progress_bar(&pb, Some("Encoding complete"));

        // Pivot to wide binary form, restricted to cohort patients
        let mut pnrs = Vec::new();
        let mut rows = Vec::new();
        let mut without_trajectories = 0usize;

        for entry in cohort.entries() {
            match memberships.get(entry.pnr.as_str()) {
                Some(ids) => {
                    pnrs.push(entry.pnr.clone());
                    rows.push(one_hot_row(ids, catalog.len()));
                }
                None if self.include_patients_without_trajectories => {
                    without_trajectories += 1;
                    pnrs.push(entry.pnr.clone());
                    rows.push(vec![0; catalog.len()]);
                }
                None => {
                    without_trajectories += 1;
                }
            }
        }

        info!(
            "Encoded {} cohort patients ({} without trajectory rows, {})",
            pnrs.len(),
            without_trajectories,
            if self.include_patients_without_trajectories {
                "kept as all-zero rows"
            } else {
                "dropped"
            }
        );

        let matrix = FeatureMatrix {
            columns: catalog.labels(),
            pnrs,
            rows,
        };

        (catalog, matrix)
    }
}

/// Binary indicator row for a membership id list
fn one_hot_row(ids: &[u32], n_columns: usize) -> Vec<u8> {
    let mut row = vec![0u8; n_columns];
    for &id in ids {
        // Identifiers are 1-based by construction
        row[(id - 1) as usize] = 1;
    }
    row
}
