use std::fmt;
use std::ops::Sub;

use rust_decimal::prelude::*;
use serde::{Serialize, Serializer};

pub const NUM_DECIMAL_PLACES: u32 = 2;

/// A monetary value with exactly [`NUM_DECIMAL_PLACES`] fractional digits.
/// May be negative, a sale can lose money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Amount(Decimal::new(cents, NUM_DECIMAL_PLACES))
    }

    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Amount::from(self.0 * Decimal::from(quantity))
    }
}

impl From<Decimal> for Amount {
    fn from(mut decimal: Decimal) -> Self {
        decimal.rescale(NUM_DECIMAL_PLACES);
        Amount(decimal)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, other: Amount) -> Amount {
        Amount::from(self.0 - other.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
