use chrono::{DateTime, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::amount::Amount;
use crate::catalog::Product;
use crate::fields;

pub const HEADER: [&str; 11] = [
    "ProductID",
    "ProductName",
    "Price",
    "Quantity",
    "Total",
    "Discount",
    "Tax",
    "Shipping",
    "Profit",
    "StaffName",
    "OrderDate",
];

/// One synthetic sale. Serializes in [`HEADER`] order.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesRecord {
    #[serde(rename = "ProductID")]
    pub product_id: String,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Price")]
    pub price: Amount,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Total")]
    pub total: Amount,
    #[serde(rename = "Discount")]
    pub discount: Amount,
    #[serde(rename = "Tax")]
    pub tax: Amount,
    #[serde(rename = "Shipping")]
    pub shipping: Amount,
    #[serde(rename = "Profit")]
    pub profit: Amount,
    #[serde(rename = "StaffName")]
    pub staff_name: String,
    #[serde(rename = "OrderDate")]
    pub order_date: NaiveDate,
}

/// The drawn inputs of a sale, before `total` and `profit` are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub price: Amount,
    pub quantity: u32,
    pub discount: Amount,
    pub tax: Amount,
    pub shipping: Amount,
}

impl Pricing {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Pricing {
            price: fields::price(rng),
            quantity: fields::quantity(rng),
            discount: fields::discount(rng),
            tax: fields::tax(rng),
            shipping: fields::shipping(rng),
        }
    }
}

impl SalesRecord {
    /// `total = price * quantity` and `profit = total - discount - tax - shipping`,
    /// with no floor on profit
    #[must_use]
    pub fn new(
        product: &Product,
        staff_name: &str,
        pricing: Pricing,
        order_date: NaiveDate,
    ) -> Self {
        let total = pricing.price.times(pricing.quantity);
        let profit = total - pricing.discount - pricing.tax - pricing.shipping;
        SalesRecord {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            price: pricing.price,
            quantity: pricing.quantity,
            total,
            discount: pricing.discount,
            tax: pricing.tax,
            shipping: pricing.shipping,
            profit,
            staff_name: staff_name.to_string(),
            order_date,
        }
    }

    /// The row as text, in [`HEADER`] order
    #[must_use]
    pub fn fields(&self) -> [String; 11] {
        [
            self.product_id.clone(),
            self.product_name.clone(),
            self.price.to_string(),
            self.quantity.to_string(),
            self.total.to_string(),
            self.discount.to_string(),
            self.tax.to_string(),
            self.shipping.to_string(),
            self.profit.to_string(),
            self.staff_name.clone(),
            self.order_date.format("%Y-%m-%d").to_string(),
        ]
    }
}

/// Synthesizes one sale: a product and a staff member picked uniformly with
/// replacement, plus a fresh draw of every field. `None` if `catalog` or
/// `roster` is empty.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[Product],
    roster: &[String],
    date_floor: NaiveDate,
    now: DateTime<Utc>,
) -> Option<SalesRecord> {
    let product = catalog.choose(rng)?;
    let staff_name = roster.choose(rng)?;
    let pricing = Pricing::draw(rng);
    let order_date = fields::order_date(rng, date_floor, now);
    Some(SalesRecord::new(product, staff_name, pricing, order_date))
}
