use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, Utc};
use csv::{ReaderBuilder, StringRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

use sales_gen::dataset::SalesGenerator;
use sales_gen::provider::FakerProvider;
use sales_gen::record::HEADER;
use sales_gen::settings::Settings;
use sales_gen::volume::Mode;
use sales_gen::writer::{append_dataset, append_records};

fn temp_csv(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "sales_gen_{}_{}.csv",
        name,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn small_settings(path: &PathBuf) -> Settings {
    Settings {
        output_path: path.clone(),
        initial_rows: 2_000,
        ..Settings::default()
    }
}

fn read_rows(path: &PathBuf) -> Vec<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader.records().map(Result::unwrap).collect()
}

fn money(field: &str) -> Decimal {
    let amount = Decimal::from_str(field).unwrap();
    assert_eq!(amount.scale(), 2, "{field} should have two decimals");
    amount
}

#[test]
fn test_first_run_then_append() {
    let path = temp_csv("append");
    let settings = small_settings(&path);

    let mode = Mode::detect(&path).unwrap();
    assert_eq!(mode, Mode::InitialLoad);
    let mut generator =
        SalesGenerator::new(StdRng::seed_from_u64(1), &mut FakerProvider, settings.clone());
    let first = generator.row_count(mode);
    assert_eq!(first, 2_000);
    let written = append_records(&path, generator.records(first)).unwrap();
    assert_eq!(written, 2_000);

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 1 + first);
    assert_eq!(rows[0], StringRecord::from(HEADER.to_vec()));

    let mode = Mode::detect(&path).unwrap();
    assert_eq!(mode, Mode::IncrementalAppend);
    let mut generator = SalesGenerator::new(StdRng::seed_from_u64(2), &mut FakerProvider, settings);
    let second = generator.row_count(mode);
    assert!((1..=10_000).contains(&second));
    let dataset = generator.assemble(second);
    append_dataset(&path, &dataset).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 1 + first + second);
    let headers = rows
        .iter()
        .filter(|row| row == &&StringRecord::from(HEADER.to_vec()))
        .count();
    assert_eq!(headers, 1);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_empty_existing_file_gets_header() {
    let path = temp_csv("empty");
    fs::File::create(&path).unwrap();
    assert_eq!(Mode::detect(&path).unwrap(), Mode::IncrementalAppend);

    let mut generator =
        SalesGenerator::new(StdRng::seed_from_u64(3), &mut FakerProvider, small_settings(&path));
    append_records(&path, generator.records(5)).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 6);
    assert_eq!(&rows[0][0], "ProductID");
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_written_rows_hold_invariants() {
    let path = temp_csv("invariants");
    let mut generator =
        SalesGenerator::new(StdRng::seed_from_u64(4), &mut FakerProvider, small_settings(&path));
    append_records(&path, generator.records(5_000)).unwrap();

    let floor = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    let today = Utc::now().date_naive();
    let rows = read_rows(&path);
    assert_eq!(rows.len(), 5_001);
    for row in &rows[1..] {
        assert_eq!(row.len(), 11);
        let price = money(&row[2]);
        let quantity: u32 = row[3].parse().unwrap();
        let total = money(&row[4]);
        let discount = money(&row[5]);
        let tax = money(&row[6]);
        let shipping = money(&row[7]);
        let profit = money(&row[8]);

        assert_eq!(total, price * Decimal::from(quantity));
        assert_eq!(profit, total - discount - tax - shipping);

        assert!((1..=10).contains(&quantity));
        assert!(price >= Decimal::from(10) && price < Decimal::from(100));
        assert!(discount >= Decimal::ZERO && discount < Decimal::from(20));
        assert!(tax >= Decimal::ZERO && tax < Decimal::from(10));
        assert!(shipping >= Decimal::ZERO && shipping < Decimal::from(5));

        let date = NaiveDate::parse_from_str(&row[10], "%Y-%m-%d").unwrap();
        assert_eq!(row[10].len(), 10);
        assert!(date >= floor && date <= today);

        assert!(!row[1].is_empty());
        assert!(!row[9].is_empty());
    }
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_unwritable_path() {
    let path = temp_csv("missing_dir").join("sales_data.csv");
    let mut generator =
        SalesGenerator::new(StdRng::seed_from_u64(5), &mut FakerProvider, small_settings(&path));
    let result = append_records(&path, generator.records(3));
    assert!(result.is_err());
    assert!(!path.exists());
}
