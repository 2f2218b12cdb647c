//! Sale, refund and inform database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for sales table
#[derive(Debug, Clone, FromRow)]
pub struct SaleModel {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for refunds table
#[derive(Debug, Clone, FromRow)]
pub struct RefundModel {
    pub id: i64,
    pub name: String,
    pub sale_id: i64,
    pub amount_cents: i64,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for informs table
#[derive(Debug, Clone, FromRow)]
pub struct InformModel {
    pub id: i64,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
