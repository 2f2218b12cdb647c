//! Schema bootstrap used by tests and first-time setup

use sqlx::{Connection, PgConnection};

/// DDL creating every family table
pub const SCHEMA_SQL: &str = include_str!("../../migrations/0001_store_schema.sql");

/// Create the family tables if they do not exist yet
pub async fn apply_schema(url: &str) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(url).await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut conn).await?;
    conn.close().await
}
