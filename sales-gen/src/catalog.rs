use log::debug;
use rand::Rng;

use crate::provider::FakeDataProvider;

/// A product offered in the synthetic store. `id` is the initials of `name`
/// and is not guaranteed to be unique across a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
}

impl Product {
    #[must_use]
    pub fn new(name: String) -> Self {
        Product {
            id: abbreviate(&name),
            name,
        }
    }
}

/// Uppercased first character of every whitespace separated word, in order
#[must_use]
pub fn abbreviate(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Draws `count` product names from `provider`. Repeated names and colliding
/// ids are kept as drawn.
pub fn build_catalog<P, R>(provider: &mut P, rng: &mut R, count: usize) -> Vec<Product>
where
    P: FakeDataProvider,
    R: Rng + ?Sized,
{
    let names: Vec<String> = (0..count).map(|_| provider.product_name(rng)).collect();
    let catalog: Vec<Product> = names.into_iter().map(Product::new).collect();
    debug!("Built a catalog of {} products", catalog.len());
    catalog
}

/// Draws `count` staff names from `provider`, duplicates included
pub fn build_roster<P, R>(provider: &mut P, rng: &mut R, count: usize) -> Vec<String>
where
    P: FakeDataProvider,
    R: Rng + ?Sized,
{
    let roster: Vec<String> = (0..count).map(|_| provider.full_name(rng)).collect();
    debug!("Built a roster of {} staff members", roster.len());
    roster
}
