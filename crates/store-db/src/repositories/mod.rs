//! Repository implementations running on the family pools

mod error;
mod pg_repository;
mod record;

pub use error::{map_db_error, map_pool_error, map_unique_violation};
pub use pg_repository::PgRepository;
pub use record::PgRecord;
