use std::path::PathBuf;

use chrono::NaiveDate;

/// Name of the file every run appends to, relative to the working directory
pub const OUTPUT_FILE: &str = "sales_data.csv";
pub const CATALOG_SIZE: usize = 100;
pub const ROSTER_SIZE: usize = 20;
/// Rows synthesized when the output file does not exist yet
pub const INITIAL_ROWS: usize = 1_000_000;

/// The fixed knobs of a run. `Default` carries the production constants; tests
/// shrink them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_path: PathBuf,
    pub catalog_size: usize,
    pub roster_size: usize,
    pub initial_rows: usize,
    /// Earliest possible order date
    pub date_floor: NaiveDate,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_path: PathBuf::from(OUTPUT_FILE),
            catalog_size: CATALOG_SIZE,
            roster_size: ROSTER_SIZE,
            initial_rows: INITIAL_ROWS,
            date_floor: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
        }
    }
}
