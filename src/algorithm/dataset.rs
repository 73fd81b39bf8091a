//! Dataset assembly and train/test partitioning
//!
//! Joins the feature matrix with the cohort's outcome labels, then splits
//! patients into disjoint train/test partitions by random sampling of
//! patient identifiers.

use std::fmt;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::{info, warn};
use rand::prelude::*;
use rand::seq::SliceRandom;

use crate::algorithm::encoding::FeatureMatrix;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::models::Cohort;

/// Name of the label column in exported tables
pub const LABEL_COLUMN: &str = "OUTCOME";

/// A feature matrix with aligned outcome labels and no identifier column
///
/// This is the shape handed to the external model collaborator: the one-hot
/// trajectory columns are the inputs, the label vector is the target.
#[derive(Debug, Clone)]
pub struct LabeledMatrix {
    feature_names: Vec<String>,
    rows: Vec<Vec<u8>>,
    labels: Vec<u8>,
}

impl LabeledMatrix {
    /// Create a labeled matrix from aligned rows and labels
    #[must_use]
    pub const fn new(feature_names: Vec<String>, rows: Vec<Vec<u8>>, labels: Vec<u8>) -> Self {
        Self {
            feature_names,
            rows,
            labels,
        }
    }

    /// Feature column names, in catalog order
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Binary feature rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Outcome labels, aligned with `rows`
    #[must_use]
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Number of rows
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of feature columns
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Number of rows with outcome 1
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.labels.iter().filter(|&&label| label == 1).count()
    }

    /// Feature rows as floats, shaped for an external fit/predict routine
    #[must_use]
    pub fn features_f32(&self) -> Vec<Vec<f32>> {
        use itertools::Itertools;

        self.rows
            .iter()
            .map(|row| row.iter().map(|&value| f32::from(value)).collect_vec())
            .collect_vec()
    }

    /// Labels as floats, in row order, shaped for an external metrics routine
    #[must_use]
    pub fn labels_f32(&self) -> Vec<f32> {
        use itertools::Itertools;

        self.labels.iter().map(|&label| f32::from(label)).collect_vec()
    }

    /// Convert to a record batch: one Int32 column per feature, then the
    /// label column
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let mut fields = Vec::with_capacity(self.n_features() + 1);
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(self.n_features() + 1);

        for (column, name) in self.feature_names.iter().enumerate() {
            fields.push(Field::new(name, DataType::Int32, false));
            arrays.push(Arc::new(Int32Array::from_iter_values(
                self.rows.iter().map(|row| i32::from(row[column])),
            )));
        }

        fields.push(Field::new(LABEL_COLUMN, DataType::Int32, false));
        arrays.push(Arc::new(Int32Array::from_iter_values(
            self.labels.iter().map(|&label| i32::from(label)),
        )));

        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
    }
}

/// Disjoint train/test partitions over patient identifiers
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    /// Training partition
    pub train: LabeledMatrix,
    /// Test partition
    pub test: LabeledMatrix,
    /// Patient identifiers in the training partition
    pub train_pnrs: Vec<String>,
    /// Patient identifiers in the test partition
    pub test_pnrs: Vec<String>,
}

impl fmt::Display for TrainTestSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Summary:")?;
        writeln!(f, "  Features: {}", self.train.n_features())?;
        writeln!(
            f,
            "  Train Patients: {} ({} deaths)",
            self.train.n_rows(),
            self.train.positive_count()
        )?;
        writeln!(
            f,
            "  Test Patients: {} ({} deaths)",
            self.test.n_rows(),
            self.test.positive_count()
        )?;
        Ok(())
    }
}

/// Assembles the labeled dataset and splits it by patient identifier
#[derive(Debug, Clone)]
pub struct DatasetAssembler {
    /// Fraction of patients sampled into the training partition
    train_fraction: f64,
    /// Seed for the split; `None` draws from OS entropy
    random_seed: Option<u64>,
}

impl DatasetAssembler {
    /// Create an assembler with an explicit fraction and seed
    #[must_use]
    pub const fn new(train_fraction: f64, random_seed: Option<u64>) -> Self {
        Self {
            train_fraction,
            random_seed,
        }
    }

    /// Create an assembler from a pipeline configuration
    #[must_use]
    pub const fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.train_fraction, config.random_seed)
    }

    /// Join features with outcomes and split into train/test partitions
    ///
    /// Sampling is uniform over distinct patients, without replacement; the
    /// partitions are disjoint and together cover every assembled patient
    /// exactly once.
    pub fn assemble(&self, features: &FeatureMatrix, cohort: &Cohort) -> Result<TrainTestSplit> {
        let outcomes = cohort.outcomes_by_pnr();

        // Inner join on PNR; rows missing from either side are dropped
        let mut joined: Vec<(usize, u8)> = Vec::with_capacity(features.n_rows());
        for (row, pnr) in features.pnrs().iter().enumerate() {
            if let Some(&outcome) = outcomes.get(pnr.as_str()) {
                joined.push((row, outcome));
            }
        }

        if joined.is_empty() {
            return Err(Error::EmptyDataset(
                "no patients remain after joining features with outcomes".to_string(),
            ));
        }

        let mut rng = match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut order: Vec<usize> = (0..joined.len()).collect();
        order.shuffle(&mut rng);

        let train_size = (joined.len() as f64 * self.train_fraction).round() as usize;
        let (train_indices, test_indices) = order.split_at(train_size);

        if train_indices.is_empty() {
            warn!("Train partition is empty; input has too few patients");
        }
        if test_indices.is_empty() {
            warn!("Test partition is empty; input has too few patients");
        }

        let (train, train_pnrs) = partition(features, &joined, train_indices);
        let (test, test_pnrs) = partition(features, &joined, test_indices);

        info!(
            "Assembled dataset: {} train / {} test patients, {} features",
            train.n_rows(),
            test.n_rows(),
            features.n_features()
        );

        Ok(TrainTestSplit {
            train,
            test,
            train_pnrs,
            test_pnrs,
        })
    }
}

/// Materialize one partition of the joined dataset
fn partition(
    features: &FeatureMatrix,
    joined: &[(usize, u8)],
    indices: &[usize],
) -> (LabeledMatrix, Vec<String>) {
    let mut rows = Vec::with_capacity(indices.len());
    let mut labels = Vec::with_capacity(indices.len());
    let mut pnrs = Vec::with_capacity(indices.len());

    for &index in indices {
        let (row, outcome) = joined[index];
        rows.push(features.rows()[row].clone());
        labels.push(outcome);
        pnrs.push(features.pnrs()[row].clone());
    }

    let matrix = LabeledMatrix::new(features.columns().to_vec(), rows, labels);
    (matrix, pnrs)
}
