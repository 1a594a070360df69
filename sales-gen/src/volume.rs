use std::fs;
use std::io;
use std::path::Path;

use log::info;
use rand::Rng;

use crate::error::GenError;
use crate::settings::Settings;

/// Whether this run seeds a fresh file or tops up an existing one.
/// Decided once from the filesystem and never re-queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    InitialLoad,
    IncrementalAppend,
}

impl Mode {
    /// # Errors
    /// Errors when the metadata of `path` cannot be read for any reason other
    /// than the file being absent
    pub fn detect(path: impl AsRef<Path>) -> Result<Self, GenError> {
        match fs::metadata(path.as_ref()) {
            Ok(_) => Ok(Mode::IncrementalAppend),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Mode::InitialLoad),
            Err(e) => Err(e.into()),
        }
    }

    pub fn row_count<R: Rng + ?Sized>(self, rng: &mut R, settings: &Settings) -> usize {
        let rows = match self {
            Mode::InitialLoad => settings.initial_rows,
            Mode::IncrementalAppend => weighted_row_count(rng),
        };
        info!("{:?}: synthesizing {} rows", self, rows);
        rows
    }
}

/// Mixture of uniform ranges skewed toward small batches:
///
/// | gate (1..=100) | rows        |
/// |----------------|-------------|
/// | 1..=50         | 1..=10      |
/// | 51..=80        | 1..=100     |
/// | 81..=95        | 1..=1000    |
/// | 96..=100       | 1..=10000   |
pub fn weighted_row_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    let upper = match rng.gen_range(1..=100) {
        1..=50 => 10,
        51..=80 => 100,
        81..=95 => 1_000,
        _ => 10_000,
    };
    rng.gen_range(1..=upper)
}
