#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod amount;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod fields;
pub mod provider;
pub mod record;
pub mod settings;
pub mod volume;
pub mod writer;
