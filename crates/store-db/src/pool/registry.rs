//! One pool per entity family, constructed once

use std::fmt;
use std::sync::Arc;

use store_core::Family;
use tokio::sync::OnceCell;
use tracing::{error, info};

use super::config::{AcquireMode, PoolConfig};
use super::error::{PoolError, PoolResult};
use super::family::{Checkout, FamilyPool, PoolStatus};
use super::resource::{Pooled, ResourceFactory};

/// The set of family pools, indexed by [`Family`]
pub struct PoolRegistry<F: ResourceFactory> {
    pools: Vec<FamilyPool<F>>,
}

impl<F: ResourceFactory> PoolRegistry<F> {
    /// Eagerly build the pools of every family.
    ///
    /// Construction is all-or-nothing: when any handle of any family fails to
    /// build, the pools completed so far are closed and the error is returned.
    pub async fn build(factory: Arc<F>, config: &PoolConfig) -> PoolResult<Self> {
        config.validate()?;

        info!(
            capacity = config.capacity,
            families = Family::COUNT,
            "Building family pools"
        );

        let mut pools: Vec<FamilyPool<F>> = Vec::with_capacity(Family::COUNT);
        for family in Family::ALL {
            match FamilyPool::build(family, Arc::clone(&factory), config).await {
                Ok(pool) => pools.push(pool),
                Err(e) => {
                    error!(%family, error = %e, "Family pool construction failed");
                    for pool in &pools {
                        pool.close().await;
                    }
                    return Err(e);
                }
            }
        }

        info!(
            handles = config.capacity * Family::COUNT,
            "Family pools ready"
        );

        Ok(Self { pools })
    }

    /// The pool serving `family`
    pub fn pool(&self, family: Family) -> &FamilyPool<F> {
        &self.pools[family.index()]
    }

    pub async fn acquire(&self, family: Family) -> PoolResult<Pooled<F::Resource>> {
        self.pool(family).acquire().await
    }

    pub async fn acquire_with(
        &self,
        family: Family,
        mode: AcquireMode,
    ) -> PoolResult<Pooled<F::Resource>> {
        self.pool(family).acquire_with(mode).await
    }

    /// Return a handle to the pool of `family`
    pub fn release(&self, family: Family, handle: Pooled<F::Resource>) -> PoolResult<()> {
        self.pool(family).release(handle)
    }

    pub async fn checkout(&self, family: Family) -> PoolResult<Checkout<F>> {
        self.pool(family).checkout().await
    }

    pub async fn checkout_with(&self, family: Family, mode: AcquireMode) -> PoolResult<Checkout<F>> {
        self.pool(family).checkout_with(mode).await
    }

    /// Status of every family, in `Family::ALL` order
    pub fn status(&self) -> Vec<PoolStatus> {
        self.pools.iter().map(FamilyPool::status).collect()
    }

    /// Families with slots out of circulation
    pub fn degraded(&self) -> Vec<Family> {
        self.status()
            .into_iter()
            .filter(PoolStatus::is_degraded)
            .map(|status| status.family)
            .collect()
    }

    /// Close every family pool
    pub async fn close(&self) {
        for pool in &self.pools {
            pool.close().await;
        }
        info!("Family pools closed");
    }
}

impl<F: ResourceFactory> fmt::Debug for PoolRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("pools", &self.pools)
            .finish()
    }
}

/// Lazily constructed registry
///
/// The first caller of [`get`](Self::get) builds the registry; concurrent
/// first callers wait for that single construction. A failed construction
/// leaves the cell empty, so the next call starts over from scratch.
pub struct RegistryCell<F: ResourceFactory> {
    factory: Arc<F>,
    config: PoolConfig,
    cell: OnceCell<PoolRegistry<F>>,
}

impl<F: ResourceFactory> RegistryCell<F> {
    pub fn new(factory: F, config: PoolConfig) -> Self {
        Self {
            factory: Arc::new(factory),
            config,
            cell: OnceCell::new(),
        }
    }

    /// Get the registry, building it on first use
    pub async fn get(&self) -> PoolResult<&PoolRegistry<F>> {
        self.cell
            .get_or_try_init(|| PoolRegistry::build(Arc::clone(&self.factory), &self.config))
            .await
    }

    /// The registry, if it has been built
    pub fn get_initialized(&self) -> Option<&PoolRegistry<F>> {
        self.cell.get()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub async fn acquire(&self, family: Family) -> PoolResult<Pooled<F::Resource>> {
        self.get().await?.acquire(family).await
    }

    pub async fn acquire_with(
        &self,
        family: Family,
        mode: AcquireMode,
    ) -> PoolResult<Pooled<F::Resource>> {
        self.get().await?.acquire_with(family, mode).await
    }

    /// Return a handle. Before the registry exists no handle can belong to it.
    pub fn release(&self, family: Family, handle: Pooled<F::Resource>) -> PoolResult<()> {
        match self.get_initialized() {
            Some(registry) => registry.release(family, handle),
            None => Err(PoolError::ForeignHandle { family }),
        }
    }
}

impl<F: ResourceFactory> fmt::Debug for RegistryCell<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCell")
            .field("config", &self.config)
            .field("registry", &self.cell.get())
            .finish()
    }
}
