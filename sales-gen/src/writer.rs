use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use csv::WriterBuilder;
use log::{debug, info};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::GenError;
use crate::record::HEADER;

/// Writes `records` as CSV rows to `sink`, preceded by [`HEADER`] when
/// `write_header` is set. Returns the number of data rows written.
///
/// # Errors
/// Errors when a record cannot be serialized or the sink fails
pub fn append_to<W, I>(sink: W, write_header: bool, records: I) -> Result<u64, GenError>
where
    W: io::Write,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    if write_header {
        writer.write_record(HEADER)?;
    }
    let mut written = 0;
    for record in records {
        writer.serialize(record)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Appends `records` to the file at `path`, creating it if needed. The header
/// is written only when the file is empty once opened. Nothing is rolled back
/// on failure, rows written before the error stay on disk.
///
/// # Errors
/// Errors when the file cannot be opened or inspected, or a write fails
pub fn append_records<I>(path: impl AsRef<Path>, records: I) -> Result<u64, GenError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let path = path.as_ref();
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let write_header = file.metadata()?.len() == 0;
    if write_header {
        debug!("{} is empty, writing header", path.display());
    }
    let written = append_to(file, write_header, records)?;
    info!("Appended {} rows to {}", written, path.display());
    Ok(written)
}

/// # Errors
/// See [`append_records`]
pub fn append_dataset(path: impl AsRef<Path>, dataset: &Dataset) -> Result<u64, GenError> {
    append_records(path, &dataset.records)
}
