//! PostgreSQL handles: one live connection plus prepared statements per family

mod postgres;
mod schema;
mod statements;

pub use postgres::{PgFamilyHandle, PgHandleFactory, PgQuery, PgQueryAs};
pub use schema::{apply_schema, SCHEMA_SQL};
pub use statements::statement_sql;
