//! Independent uniform draws for each generated column.
//!
//! Money is drawn over whole cents so every half-open range stays half-open
//! once printed with two decimals.

use std::ops::{Range, RangeInclusive};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rand::Rng;

use crate::amount::Amount;

pub const PRICE_CENTS: Range<i64> = 1_000..10_000;
pub const QUANTITY: RangeInclusive<u32> = 1..=10;
pub const DISCOUNT_CENTS: Range<i64> = 0..2_000;
pub const TAX_CENTS: Range<i64> = 0..1_000;
pub const SHIPPING_CENTS: Range<i64> = 0..500;

pub fn price<R: Rng + ?Sized>(rng: &mut R) -> Amount {
    Amount::from_cents(rng.gen_range(PRICE_CENTS))
}

pub fn quantity<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(QUANTITY)
}

pub fn discount<R: Rng + ?Sized>(rng: &mut R) -> Amount {
    Amount::from_cents(rng.gen_range(DISCOUNT_CENTS))
}

pub fn tax<R: Rng + ?Sized>(rng: &mut R) -> Amount {
    Amount::from_cents(rng.gen_range(TAX_CENTS))
}

pub fn shipping<R: Rng + ?Sized>(rng: &mut R) -> Amount {
    Amount::from_cents(rng.gen_range(SHIPPING_CENTS))
}

/// Day of an instant drawn uniformly over the seconds in `[floor, now)`.
/// Falls back to `floor` when `now` is not after it.
pub fn order_date<R: Rng + ?Sized>(
    rng: &mut R,
    floor: NaiveDate,
    now: DateTime<Utc>,
) -> NaiveDate {
    draw_day(rng, floor, now).unwrap_or(floor)
}

fn draw_day<R: Rng + ?Sized>(
    rng: &mut R,
    floor: NaiveDate,
    now: DateTime<Utc>,
) -> Option<NaiveDate> {
    let start = Utc.from_utc_datetime(&floor.and_hms_opt(0, 0, 0)?).timestamp();
    let end = now.timestamp();
    if end <= start {
        return None;
    }
    let secs = rng.gen_range(start..end);
    DateTime::from_timestamp(secs, 0).map(|instant| instant.date_naive())
}
