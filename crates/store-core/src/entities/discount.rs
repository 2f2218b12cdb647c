//! Discount entity - a percentage off one product

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreEntity;
use crate::value_objects::Family;

/// Discount entity, named by its promotion code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub id: i64,
    /// Promotion code
    pub name: String,
    pub product_id: i64,
    /// Percentage off, 0..=100
    pub percent: i16,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Discount {
    /// Apply the discount to a price, rounding down to whole cents.
    /// Inactive discounts leave the price untouched.
    pub fn apply(&self, price_cents: i64) -> i64 {
        if !self.active {
            return price_cents;
        }
        let percent = i64::from(self.percent.clamp(0, 100));
        price_cents - price_cents * percent / 100
    }
}

impl StoreEntity for Discount {
    const FAMILY: Family = Family::Discounts;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
