//! Inform entity - a store notice or report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreEntity;
use crate::value_objects::Family;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inform {
    pub id: i64,
    /// Title
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreEntity for Inform {
    const FAMILY: Family = Family::Informs;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
