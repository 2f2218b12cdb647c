//! Repository traits (ports) - define the interface for data access
//!
//! Every family supports the same six operations, so a single generic port
//! replaces one trait per entity type.

use async_trait::async_trait;

use crate::entities::StoreEntity;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait Repository<E: StoreEntity>: Send + Sync {
    /// Insert a new record, returning its id
    async fn add(&self, entity: &E) -> RepoResult<i64>;

    /// Find a record by id
    async fn get_by_id(&self, id: i64) -> RepoResult<Option<E>>;

    /// Find a record by its unique name
    async fn get_by_name(&self, name: &str) -> RepoResult<Option<E>>;

    /// List all records ordered by id
    async fn list(&self) -> RepoResult<Vec<E>>;

    /// Update an existing record
    async fn modify(&self, entity: &E) -> RepoResult<()>;

    /// Delete a record
    async fn remove(&self, id: i64) -> RepoResult<()>;
}
