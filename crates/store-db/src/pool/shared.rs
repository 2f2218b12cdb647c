//! Process-wide registry over PostgreSQL handles

use std::sync::Arc;

use store_common::DatabaseConfig;
use tokio::sync::OnceCell;

use super::config::PoolConfig;
use super::error::PoolResult;
use super::registry::PoolRegistry;
use crate::handle::PgHandleFactory;

static SHARED: OnceCell<PoolRegistry<PgHandleFactory>> = OnceCell::const_new();

/// Get the process-wide registry, building it on first use.
///
/// Initialization is guarded: concurrent first callers trigger exactly one
/// construction. If it fails the error goes to the caller that ran it and the
/// next call retries. Later calls ignore `config`.
///
/// Prefer passing a [`RegistryCell`](super::RegistryCell) or a built
/// [`PoolRegistry`] where the caller owns the wiring.
pub async fn shared_registry(
    config: &DatabaseConfig,
) -> PoolResult<&'static PoolRegistry<PgHandleFactory>> {
    SHARED
        .get_or_try_init(|| async {
            let factory = PgHandleFactory::new(config.url.clone());
            PoolRegistry::build(Arc::new(factory), &PoolConfig::from(config)).await
        })
        .await
}
