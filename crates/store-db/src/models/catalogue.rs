//! Product and discount database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for discounts table
#[derive(Debug, Clone, FromRow)]
pub struct DiscountModel {
    pub id: i64,
    pub name: String,
    pub product_id: i64,
    pub percent: i16,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
