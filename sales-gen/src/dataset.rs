use chrono::Utc;
use log::debug;
use rand::Rng;

use crate::catalog::{build_catalog, build_roster, Product};
use crate::provider::FakeDataProvider;
use crate::record::{synthesize, SalesRecord, HEADER};
use crate::settings::Settings;
use crate::volume::Mode;

/// Header plus records, held in memory for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub records: Vec<SalesRecord>,
}

impl Dataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row followed by every record as text
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(self.records.len() + 1);
        rows.push(HEADER.iter().map(ToString::to_string).collect());
        rows.extend(self.records.iter().map(|record| record.fields().to_vec()));
        rows
    }
}

/// Owns the per-run catalog, roster and random handle and synthesizes
/// records from them
#[derive(Debug)]
pub struct SalesGenerator<R> {
    rng: R,
    catalog: Vec<Product>,
    roster: Vec<String>,
    settings: Settings,
}

impl<R: Rng> SalesGenerator<R> {
    /// Builds the catalog and roster once, drawing from `provider` through `rng`
    pub fn new<P: FakeDataProvider>(mut rng: R, provider: &mut P, settings: Settings) -> Self {
        let catalog = build_catalog(provider, &mut rng, settings.catalog_size);
        let roster = build_roster(provider, &mut rng, settings.roster_size);
        SalesGenerator {
            rng,
            catalog,
            roster,
            settings,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    #[must_use]
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn row_count(&mut self, mode: Mode) -> usize {
        mode.row_count(&mut self.rng, &self.settings)
    }

    /// Lazily synthesizes up to `count` records, each with independent draws.
    /// Yields nothing if the catalog or roster is empty.
    pub fn records(&mut self, count: usize) -> impl Iterator<Item = SalesRecord> + '_ {
        debug!("Streaming {} records", count);
        let floor = self.settings.date_floor;
        let catalog = &self.catalog;
        let roster = &self.roster;
        let rng = &mut self.rng;
        (0..count).map_while(move |_| synthesize(&mut *rng, catalog, roster, floor, Utc::now()))
    }

    /// Synthesizes `count` records into memory
    pub fn assemble(&mut self, count: usize) -> Dataset {
        Dataset {
            records: self.records(count).collect(),
        }
    }
}
