use fake::faker::company::en::{BsNoun, Buzzword};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Source of the human names and product-name strings the catalog and roster
/// are built from. Every draw goes through the caller's random handle so a
/// seeded run is reproducible end to end.
pub trait FakeDataProvider {
    fn product_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String;

    fn full_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String;
}

/// [`FakeDataProvider`] backed by the `fake` crate's english locale
#[derive(Debug, Default, Clone, Copy)]
pub struct FakerProvider;

impl FakeDataProvider for FakerProvider {
    fn product_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let adjective: String = Buzzword().fake_with_rng(rng);
        let noun: String = BsNoun().fake_with_rng(rng);
        title_case(&format!("{adjective} {noun}"))
    }

    fn full_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        Name().fake_with_rng(rng)
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
