//! Writes a fixed-seed file of sales records and logs how long synthesis and
//! writing take. Run with `RUST_LOG=warn cargo run --example bulk`

use std::error::Error;
use std::time::Instant;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sales_gen::dataset::SalesGenerator;
use sales_gen::provider::FakerProvider;
use sales_gen::settings::Settings;
use sales_gen::writer::append_dataset;

const ROWS: usize = 100_000;
const OUTPUT: &str = "resources/output/bulk.csv";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    std::fs::create_dir_all("resources/output")?;
    std::fs::remove_file(OUTPUT).ok();

    let start = Instant::now();
    let mut generator =
        SalesGenerator::new(StdRng::seed_from_u64(42), &mut FakerProvider, Settings::default());
    let dataset = generator.assemble(ROWS);
    warn!("Synthesis took: {:.2?}", start.elapsed());

    let start_writing = Instant::now();
    append_dataset(OUTPUT, &dataset)?;
    warn!("Writing took: {:.2?}", start_writing.elapsed());

    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
