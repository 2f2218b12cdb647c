//! Generic PostgreSQL repository over the family pools

use std::marker::PhantomData;

use async_trait::async_trait;
use store_core::error::DomainError;
use store_core::{Operation, RepoResult, Repository};
use tracing::instrument;

use super::error::{map_db_error, map_pool_error, map_unique_violation};
use super::record::{InsertedId, PgRecord};
use crate::handle::PgHandleFactory;
use crate::pool::{AcquireMode, Checkout, FamilyPool, PoolRegistry};

/// Repository for one entity type, backed by the pool of its family
///
/// Every call checks out a handle for the duration of one statement; the
/// handle returns to the pool on every exit path.
pub struct PgRepository<E> {
    pool: FamilyPool<PgHandleFactory>,
    mode: Option<AcquireMode>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: PgRecord> PgRepository<E> {
    /// Create a repository using the registry's pool for `E::FAMILY`
    pub fn new(registry: &PoolRegistry<PgHandleFactory>) -> Self {
        Self {
            pool: registry.pool(E::FAMILY).clone(),
            mode: None,
            _entity: PhantomData,
        }
    }

    /// Override the pool's default acquire mode for this repository
    #[must_use]
    pub fn with_acquire_mode(mut self, mode: AcquireMode) -> Self {
        self.mode = Some(mode);
        self
    }

    async fn checkout(&self) -> RepoResult<Checkout<PgHandleFactory>> {
        let checkout = match self.mode {
            Some(mode) => self.pool.checkout_with(mode).await,
            None => self.pool.checkout().await,
        };
        checkout.map_err(map_pool_error)
    }
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            mode: self.mode,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: PgRecord> Repository<E> for PgRepository<E> {
    #[instrument(skip(self, entity), fields(family = %E::FAMILY))]
    async fn add(&self, entity: &E) -> RepoResult<i64> {
        let entity = entity.clone();
        let mut handle = self.checkout().await?;

        let (id,) = handle
            .fetch_one::<InsertedId, _>(Operation::Add, move |q| entity.bind_add(q))
            .await
            .map_err(|e| map_unique_violation(e, E::FAMILY))?;

        Ok(id)
    }

    #[instrument(skip(self), fields(family = %E::FAMILY))]
    async fn get_by_id(&self, id: i64) -> RepoResult<Option<E>> {
        let mut handle = self.checkout().await?;

        let model = handle
            .fetch_optional::<E::Model, _>(Operation::GetById, move |q| q.bind(id))
            .await
            .map_err(map_db_error)?;

        Ok(model.map(Into::into))
    }

    #[instrument(skip(self), fields(family = %E::FAMILY))]
    async fn get_by_name(&self, name: &str) -> RepoResult<Option<E>> {
        let name = name.to_owned();
        let mut handle = self.checkout().await?;

        let model = handle
            .fetch_optional::<E::Model, _>(Operation::GetByName, move |q| q.bind(name))
            .await
            .map_err(map_db_error)?;

        Ok(model.map(Into::into))
    }

    #[instrument(skip(self), fields(family = %E::FAMILY))]
    async fn list(&self) -> RepoResult<Vec<E>> {
        let mut handle = self.checkout().await?;

        let models = handle
            .fetch_all::<E::Model, _>(Operation::List, |q| q)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, entity), fields(family = %E::FAMILY, id = entity.id()))]
    async fn modify(&self, entity: &E) -> RepoResult<()> {
        let id = entity.id();
        let entity = entity.clone();
        let mut handle = self.checkout().await?;

        let result = handle
            .execute(Operation::Modify, move |q| entity.bind_modify(q))
            .await
            .map_err(|e| map_unique_violation(e, E::FAMILY))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                family: E::FAMILY,
                id,
            });
        }

        Ok(())
    }

    #[instrument(skip(self), fields(family = %E::FAMILY))]
    async fn remove(&self, id: i64) -> RepoResult<()> {
        let mut handle = self.checkout().await?;

        let result = handle
            .execute(Operation::Remove, move |q| q.bind(id))
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                family: E::FAMILY,
                id,
            });
        }

        Ok(())
    }
}
