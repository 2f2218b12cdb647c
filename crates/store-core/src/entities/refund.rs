//! Refund entity - money returned against a sale

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreEntity;
use crate::value_objects::Family;

/// Refund entity, named by its reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    pub id: i64,
    pub name: String,
    pub sale_id: i64,
    pub amount_cents: i64,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreEntity for Refund {
    const FAMILY: Family = Family::Refunds;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
