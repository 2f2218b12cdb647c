//! # store-db
//!
//! Database layer for the store backend.
//!
//! ## Overview
//!
//! Every entity family (users, sales, refunds, products, discounts, informs)
//! gets its own fixed set of pre-built database handles. A handle wraps one
//! live PostgreSQL connection plus one prepared statement per operation, and
//! is checked out exclusively by one caller at a time. This crate provides:
//!
//! - [`FamilyPool`]: a bounded, FIFO-fair pool of handles for one family
//! - [`PoolRegistry`]: one pool per family, built eagerly and all-or-nothing
//! - [`RegistryCell`] / [`shared_registry`]: once-initialized registry access
//! - [`PgFamilyHandle`]: the PostgreSQL handle and its prepared statements
//! - [`PgRepository`]: the generic repository running on top of the pools
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_core::{Family, Repository, User};
//! use store_db::{shared_registry, PgRepository};
//!
//! async fn example(config: &store_common::DatabaseConfig) -> anyhow::Result<()> {
//!     let registry = shared_registry(config).await?;
//!
//!     // Scoped checkout: the handle goes back to the pool on drop
//!     let handle = registry.checkout(Family::Products).await?;
//!     drop(handle);
//!
//!     let users = PgRepository::<User>::new(registry);
//!     let everyone = users.list().await?;
//!     Ok(())
//! }
//! ```

pub mod handle;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use handle::{apply_schema, PgFamilyHandle, PgHandleFactory, SCHEMA_SQL};
pub use pool::{
    shared_registry, AcquireMode, Checkout, FamilyPool, HandleTag, PoolConfig, PoolError,
    PoolRegistry, PoolResult, PoolStatus, Pooled, PooledResource, RegistryCell, ResourceFactory,
};
pub use repositories::{PgRecord, PgRepository};
