//! Sale entity - one product sold to one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreEntity;
use crate::value_objects::Family;

/// Sale entity, named by its receipt code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    /// Receipt code
    pub name: String,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sale {
    /// Effective price paid per unit, after any discount
    pub fn unit_price_cents(&self) -> i64 {
        if self.quantity <= 0 {
            return 0;
        }
        self.total_cents / i64::from(self.quantity)
    }
}

impl StoreEntity for Sale {
    const FAMILY: Family = Family::Sales;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price() {
        let now = Utc::now();
        let sale = Sale {
            id: 1,
            name: "R-0001".to_string(),
            user_id: 2,
            product_id: 3,
            quantity: 4,
            total_cents: 1000,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(sale.unit_price_cents(), 250);
        assert_eq!(Sale { quantity: 0, ..sale }.unit_price_cents(), 0);
    }
}
