//! Product entity - an item in the catalogue

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreEntity;
use crate::value_objects::Family;

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Unit price in cents
    pub price_cents: i64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: i64, name: String, price_cents: i64, stock: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            price_cents,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Remove `quantity` units from stock, returning false if not enough are left
    pub fn take_stock(&mut self, quantity: i32) -> bool {
        if quantity <= 0 || quantity > self.stock {
            return false;
        }
        self.stock -= quantity;
        self.updated_at = Utc::now();
        true
    }
}

impl StoreEntity for Product {
    const FAMILY: Family = Family::Products;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
