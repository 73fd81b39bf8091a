//! TSV reading into Arrow record batches
//!
//! The register extracts are tab-separated text files with a header row.
//! Each file is read against the Arrow schema its register declares, so
//! date and integer columns are typed at load time. A cell that does not
//! match its declared type is a fatal parse error.

use std::fs::File;
use std::path::Path;

use arrow::csv::ReaderBuilder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::Result;

/// Default number of rows per record batch
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Read a TSV file into record batches using the given schema
///
/// The header row is required and skipped; columns must appear in the
/// order the register schema declares them.
pub fn read_tsv(path: &Path, schema: SchemaRef) -> Result<Vec<RecordBatch>> {
    let file = File::open(path)?;
    let reader = ReaderBuilder::new(schema)
        .with_header(true)
        .with_delimiter(b'\t')
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(file)?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }

    debug!(
        "Read {} batches ({} rows) from {}",
        batches.len(),
        batches.iter().map(RecordBatch::num_rows).sum::<usize>(),
        path.display()
    );

    Ok(batches)
}
