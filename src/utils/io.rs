//! TSV output for assembled datasets

use std::fs::File;
use std::path::Path;

use arrow::csv::WriterBuilder;
use log::info;

use crate::algorithm::dataset::LabeledMatrix;
use crate::error::Result;

/// Write a labeled matrix to a TSV file with a header row
///
/// Columns are the one-hot trajectory indicators in catalog order followed
/// by the outcome label; the patient identifier is not part of the matrix.
pub fn write_matrix_tsv(matrix: &LabeledMatrix, path: &Path) -> Result<()> {
    let batch = matrix.to_record_batch()?;

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_delimiter(b'\t')
        .build(file);
    writer.write(&batch)?;

    info!(
        "Wrote {} rows x {} columns to {}",
        batch.num_rows(),
        batch.num_columns(),
        path.display()
    );

    Ok(())
}
