use std::error::Error;
use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sales_gen::dataset::SalesGenerator;
use sales_gen::provider::FakerProvider;
use sales_gen::settings::Settings;
use sales_gen::volume::Mode;
use sales_gen::writer::append_records;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the random source. Defaults to the current time in nanoseconds
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

// keeps the low 64 bits of the nanosecond count
#[allow(clippy::cast_possible_truncation)]
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let settings = Settings::default();
    let seed = cli.seed.unwrap_or_else(time_seed);
    info!("Seeding random source with {}", seed);

    let mode = Mode::detect(&settings.output_path)?;
    let rng = StdRng::seed_from_u64(seed);
    let mut generator = SalesGenerator::new(rng, &mut FakerProvider, settings);
    let output_path = generator.settings().output_path.clone();
    let rows = generator.row_count(mode);
    println!("Generated {} rows of data", rows);

    append_records(&output_path, generator.records(rows))?;

    println!(
        "Sales data generated and saved to {} in {:.2?}",
        output_path.display(),
        start.elapsed()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run aborted: {:?}", e);
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
