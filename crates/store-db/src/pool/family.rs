//! Bounded pool of handles for a single entity family

use std::collections::VecDeque;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use parking_lot::Mutex;
use serde::Serialize;
use store_core::Family;
use tokio::sync::{Semaphore, TryAcquireError};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::config::{AcquireMode, PoolConfig};
use super::error::{PoolError, PoolResult};
use super::resource::{HandleTag, Pooled, PooledResource, ResourceFactory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Available,
    CheckedOut,
    Rebuilding,
    Quarantined,
    /// Closed on shutdown
    Retired,
}

/// Snapshot of one family pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStatus {
    pub family: Family,
    pub capacity: usize,
    pub available: usize,
    pub checked_out: usize,
    pub rebuilding: usize,
    pub quarantined: usize,
    pub retired: usize,
    pub closed: bool,
}

impl PoolStatus {
    /// Some slots are out of circulation because their handle broke
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.rebuilding > 0 || self.quarantined > 0
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available == 0
    }
}

struct Slots<R> {
    available: VecDeque<Pooled<R>>,
    states: Vec<SlotState>,
    /// Checkouts per slot so far; the live checkout carries the latest value
    generations: Vec<u64>,
    closed: bool,
}

impl<R> Slots<R> {
    fn count(&self, state: SlotState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }

    fn take_available(&mut self) -> Option<Pooled<R>> {
        let mut handle = self.available.pop_front()?;
        let slot = handle.slot();
        self.states[slot] = SlotState::CheckedOut;
        self.generations[slot] += 1;
        handle.stamp(self.generations[slot]);
        Some(handle)
    }

    /// Whether `tag` belongs to the current checkout of its slot
    fn is_live(&self, tag: HandleTag) -> bool {
        self.states.get(tag.slot()) == Some(&SlotState::CheckedOut)
            && self.generations.get(tag.slot()) == Some(&tag.generation())
    }

    fn put_available(&mut self, handle: Pooled<R>) {
        self.states[handle.slot()] = SlotState::Available;
        self.available.push_back(handle);
    }
}

struct PoolShared<F: ResourceFactory> {
    id: Uuid,
    family: Family,
    capacity: usize,
    /// One token per handle in `slots.available`
    tokens: Semaphore,
    slots: Mutex<Slots<F::Resource>>,
    factory: Arc<F>,
    default_mode: AcquireMode,
    rebuild_attempts: u32,
    rebuild_backoff: Duration,
}

impl<F: ResourceFactory> PoolShared<F> {
    fn tag(&self, slot: usize) -> HandleTag {
        HandleTag::new(self.id, self.family, slot)
    }

    /// Rebuild a slot whose handle was discarded, then return it to circulation
    async fn rebuild(self: Arc<Self>, slot: usize) {
        let mut guard = RebuildGuard {
            shared: Arc::clone(&self),
            slot,
            armed: true,
        };
        self.rebuild_slot(slot).await;
        guard.armed = false;
    }

    async fn rebuild_slot(&self, slot: usize) {
        for attempt in 1..=self.rebuild_attempts {
            if self.retire_if_closed(slot) {
                return;
            }

            match self.factory.build(self.family, slot).await {
                Ok(resource) => {
                    let returned = {
                        let mut slots = self.slots.lock();
                        if slots.closed {
                            slots.states[slot] = SlotState::Retired;
                            Err(resource)
                        } else {
                            slots.put_available(Pooled::new(self.tag(slot), resource));
                            Ok(())
                        }
                    };

                    match returned {
                        Ok(()) => {
                            self.tokens.add_permits(1);
                            info!(family = %self.family, slot, attempt, "Rebuilt broken handle");
                        }
                        Err(resource) => resource.close().await,
                    }
                    return;
                }
                Err(e) => {
                    warn!(
                        family = %self.family,
                        slot,
                        attempt,
                        error = %e,
                        "Failed to rebuild handle"
                    );
                    if attempt < self.rebuild_attempts {
                        tokio::time::sleep(self.rebuild_backoff * attempt).await;
                    }
                }
            }
        }

        self.quarantine(slot);
    }

    fn retire_if_closed(&self, slot: usize) -> bool {
        let mut slots = self.slots.lock();
        if slots.closed {
            slots.states[slot] = SlotState::Retired;
        }
        slots.closed
    }

    /// Settle a slot left `Rebuilding` by a task that never finished
    fn abandon_rebuild(&self, slot: usize) {
        let state = self.slots.lock().states[slot];
        if state == SlotState::Rebuilding {
            warn!(family = %self.family, slot, "Rebuild task ended before finishing");
            self.quarantine(slot);
        }
    }

    fn quarantine(&self, slot: usize) {
        let mut slots = self.slots.lock();
        if slots.closed {
            slots.states[slot] = SlotState::Retired;
            return;
        }
        slots.states[slot] = SlotState::Quarantined;
        let quarantined = slots.count(SlotState::Quarantined);
        drop(slots);

        error!(
            family = %self.family,
            slot,
            quarantined,
            capacity = self.capacity,
            "Handle slot quarantined, family degraded"
        );
    }
}

/// Quarantines the slot if the rebuild task is dropped mid-flight, as on a
/// panic in the factory or runtime shutdown
struct RebuildGuard<F: ResourceFactory> {
    shared: Arc<PoolShared<F>>,
    slot: usize,
    armed: bool,
}

impl<F: ResourceFactory> Drop for RebuildGuard<F> {
    fn drop(&mut self) {
        if self.armed {
            self.shared.abandon_rebuild(self.slot);
        }
    }
}

/// Bounded pool of pre-built handles for one family
///
/// Cloning is cheap and yields another reference to the same pool.
pub struct FamilyPool<F: ResourceFactory> {
    shared: Arc<PoolShared<F>>,
}

impl<F: ResourceFactory> Clone for FamilyPool<F> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<F: ResourceFactory> FamilyPool<F> {
    /// Build all `capacity` handles for `family` up front.
    ///
    /// Slots are built concurrently. If any slot fails, the handles that did
    /// build are closed and the error of the lowest failing slot is returned.
    pub async fn build(family: Family, factory: Arc<F>, config: &PoolConfig) -> PoolResult<Self> {
        config.validate()?;

        let builder = factory.as_ref();
        let results = join_all((0..config.capacity).map(|slot| builder.build(family, slot))).await;

        let mut resources = Vec::with_capacity(config.capacity);
        let mut failure = None;
        for (slot, result) in results.into_iter().enumerate() {
            match result {
                Ok(resource) => resources.push(resource),
                Err(source) if failure.is_none() => {
                    failure = Some(PoolError::Initialization {
                        family,
                        slot,
                        source,
                    });
                }
                Err(source) => {
                    debug!(%family, slot, error = %source, "Further slot failed to build");
                }
            }
        }

        if let Some(err) = failure {
            let built = resources.len();
            for resource in resources {
                resource.close().await;
            }
            debug!(%family, built, "Closed handles of incomplete family pool");
            return Err(err);
        }

        let id = Uuid::new_v4();
        let available = resources
            .into_iter()
            .enumerate()
            .map(|(slot, resource)| Pooled::new(HandleTag::new(id, family, slot), resource))
            .collect();

        debug!(%family, capacity = config.capacity, pool_id = %id, "Family pool built");

        Ok(Self {
            shared: Arc::new(PoolShared {
                id,
                family,
                capacity: config.capacity,
                tokens: Semaphore::new(config.capacity),
                slots: Mutex::new(Slots {
                    available,
                    states: vec![SlotState::Available; config.capacity],
                    generations: vec![0; config.capacity],
                    closed: false,
                }),
                factory,
                default_mode: config.acquire_mode,
                rebuild_attempts: config.rebuild_attempts,
                rebuild_backoff: config.rebuild_backoff,
            }),
        })
    }

    pub fn family(&self) -> Family {
        self.shared.family
    }

    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    pub fn id(&self) -> Uuid {
        self.shared.id
    }

    /// Acquire a handle using the pool's configured mode
    pub async fn acquire(&self) -> PoolResult<Pooled<F::Resource>> {
        self.acquire_with(self.shared.default_mode).await
    }

    /// Acquire a handle, waiting as `mode` allows.
    ///
    /// Waiters are served in FIFO order. The returned handle is out of the
    /// available set until it is passed back to [`release`](Self::release).
    pub async fn acquire_with(&self, mode: AcquireMode) -> PoolResult<Pooled<F::Resource>> {
        let family = self.shared.family;

        let permit = match mode.timeout() {
            None => self.shared.tokens.try_acquire().map_err(|e| match e {
                TryAcquireError::Closed => PoolError::Closed { family },
                TryAcquireError::NoPermits => {
                    warn!(%family, "Pool exhausted, failing fast");
                    PoolError::Exhausted {
                        family,
                        waited: Duration::ZERO,
                    }
                }
            })?,
            Some(timeout) => {
                match tokio::time::timeout(timeout, self.shared.tokens.acquire()).await {
                    Ok(Ok(permit)) => permit,
                    Ok(Err(_)) => return Err(PoolError::Closed { family }),
                    Err(_) => {
                        warn!(%family, waited = ?timeout, "Pool exhausted, acquire timed out");
                        return Err(PoolError::Exhausted {
                            family,
                            waited: timeout,
                        });
                    }
                }
            }
        };
        // The token travels with the handle and comes back on release
        permit.forget();

        let handle = self.shared.slots.lock().take_available();
        match handle {
            Some(handle) => {
                debug!(%family, slot = handle.slot(), "Handle acquired");
                Ok(handle)
            }
            // Only reachable when `close` drained the queue after we got a token
            None => Err(PoolError::Closed { family }),
        }
    }

    /// Return a handle to the pool.
    ///
    /// Rejects handles from another pool and handles whose checkout was
    /// already returned, even when the slot has since been acquired again;
    /// in both cases the pool state is unchanged. A broken handle
    /// is dropped and its slot rebuilt in the background. After `close`, the
    /// handle is dropped instead of returned.
    pub fn release(&self, handle: Pooled<F::Resource>) -> PoolResult<()> {
        let family = self.shared.family;
        let tag = handle.tag();

        if tag.pool_id() != self.shared.id {
            warn!(%family, slot = tag.slot(), "Rejected release of foreign handle");
            return Err(PoolError::ForeignHandle { family });
        }

        let mut slots = self.shared.slots.lock();
        if !slots.is_live(tag) {
            drop(slots);
            warn!(
                %family,
                slot = tag.slot(),
                generation = tag.generation(),
                "Rejected release of stale or returned handle"
            );
            return Err(PoolError::DoubleRelease {
                family,
                slot: tag.slot(),
            });
        }

        if slots.closed {
            slots.states[tag.slot()] = SlotState::Retired;
            drop(slots);
            debug!(%family, slot = tag.slot(), "Handle released after close, dropping");
            return Ok(());
        }

        if handle.is_broken() {
            slots.states[tag.slot()] = SlotState::Rebuilding;
            drop(slots);
            warn!(%family, slot = tag.slot(), "Broken handle released, rebuilding slot");
            drop(handle);
            self.spawn_rebuild(tag.slot());
            return Ok(());
        }

        slots.put_available(handle);
        drop(slots);
        self.shared.tokens.add_permits(1);
        debug!(%family, slot = tag.slot(), "Handle released");
        Ok(())
    }

    fn spawn_rebuild(&self, slot: usize) {
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let shared = Arc::clone(&self.shared);
                runtime.spawn(shared.rebuild(slot));
            }
            Err(_) => {
                warn!(family = %self.shared.family, slot, "No async runtime to rebuild handle");
                self.shared.quarantine(slot);
            }
        }
    }

    /// Acquire a scoped handle using the pool's configured mode
    pub async fn checkout(&self) -> PoolResult<Checkout<F>> {
        self.checkout_with(self.shared.default_mode).await
    }

    /// Acquire a scoped handle that is released when dropped
    pub async fn checkout_with(&self, mode: AcquireMode) -> PoolResult<Checkout<F>> {
        let handle = self.acquire_with(mode).await?;
        Ok(Checkout {
            pool: self.clone(),
            handle: Some(handle),
        })
    }

    #[must_use]
    pub fn status(&self) -> PoolStatus {
        let slots = self.shared.slots.lock();
        PoolStatus {
            family: self.shared.family,
            capacity: self.shared.capacity,
            available: slots.count(SlotState::Available),
            checked_out: slots.count(SlotState::CheckedOut),
            rebuilding: slots.count(SlotState::Rebuilding),
            quarantined: slots.count(SlotState::Quarantined),
            retired: slots.count(SlotState::Retired),
            closed: slots.closed,
        }
    }

    /// Shut the pool down.
    ///
    /// Pending and future acquires fail with `Closed`; idle handles are closed
    /// now and checked-out handles are dropped when released.
    pub async fn close(&self) {
        self.shared.tokens.close();

        let drained: Vec<_> = {
            let mut slots = self.shared.slots.lock();
            if slots.closed {
                return;
            }
            slots.closed = true;
            let drained: Vec<_> = slots.available.drain(..).collect();
            for handle in &drained {
                slots.states[handle.slot()] = SlotState::Retired;
            }
            drained
        };

        let closed = drained.len();
        for handle in drained {
            handle.into_resource().close().await;
        }

        info!(family = %self.shared.family, closed, "Family pool closed");
    }
}

impl<F: ResourceFactory> fmt::Debug for FamilyPool<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyPool")
            .field("id", &self.shared.id)
            .field("status", &self.status())
            .finish()
    }
}

/// A handle that goes back to its pool when dropped
pub struct Checkout<F: ResourceFactory> {
    pool: FamilyPool<F>,
    handle: Option<Pooled<F::Resource>>,
}

impl<F: ResourceFactory> Checkout<F> {
    pub fn tag(&self) -> HandleTag {
        self.pooled().tag()
    }

    fn pooled(&self) -> &Pooled<F::Resource> {
        self.handle.as_ref().expect("checkout holds its handle until dropped")
    }
}

impl<F: ResourceFactory> Deref for Checkout<F> {
    type Target = F::Resource;

    fn deref(&self) -> &F::Resource {
        self.pooled()
    }
}

impl<F: ResourceFactory> DerefMut for Checkout<F> {
    fn deref_mut(&mut self) -> &mut F::Resource {
        self.handle
            .as_mut()
            .expect("checkout holds its handle until dropped")
    }
}

impl<F: ResourceFactory> Drop for Checkout<F> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.pool.release(handle) {
                error!(error = %e, "Checkout failed to return its handle");
            }
        }
    }
}

impl<F: ResourceFactory> fmt::Debug for Checkout<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkout")
            .field("family", &self.pool.family())
            .field("slot", &self.handle.as_ref().map(Pooled::slot))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;

    #[derive(Debug, Clone)]
    struct Conn {
        serial: usize,
        broken: Arc<AtomicBool>,
        closed: Arc<AtomicUsize>,
    }

    impl Conn {
        fn mark_broken(&self) {
            self.broken.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl PooledResource for Conn {
        fn is_broken(&self) -> bool {
            self.broken.load(Ordering::SeqCst)
        }

        async fn close(self) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct Factory {
        built: AtomicUsize,
        closed: Arc<AtomicUsize>,
        fail_from: Option<usize>,
        panic_from: Option<usize>,
    }

    #[async_trait]
    impl ResourceFactory for Factory {
        type Resource = Conn;

        async fn build(&self, _family: Family, _slot: usize) -> anyhow::Result<Conn> {
            let serial = self.built.fetch_add(1, Ordering::SeqCst);
            if self.fail_from.is_some_and(|n| serial >= n) {
                anyhow::bail!("connection refused");
            }
            if self.panic_from.is_some_and(|n| serial >= n) {
                panic!("driver panicked");
            }
            Ok(Conn {
                serial,
                broken: Arc::new(AtomicBool::new(false)),
                closed: Arc::clone(&self.closed),
            })
        }
    }

    fn config(capacity: usize) -> PoolConfig {
        PoolConfig {
            capacity,
            acquire_mode: AcquireMode::Wait(Duration::from_millis(200)),
            rebuild_attempts: 2,
            rebuild_backoff: Duration::from_millis(1),
        }
    }

    async fn pool(capacity: usize) -> FamilyPool<Factory> {
        FamilyPool::build(Family::Users, Arc::new(Factory::default()), &config(capacity))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_build_fills_every_slot() {
        let pool = pool(3).await;
        let status = pool.status();
        assert_eq!(status.capacity, 3);
        assert_eq!(status.available, 3);
        assert_eq!(status.checked_out, 0);
        assert!(!status.is_degraded());
    }

    #[tokio::test]
    async fn test_build_failure_is_initialization_error() {
        let factory = Arc::new(Factory {
            fail_from: Some(1),
            ..Factory::default()
        });
        let err = FamilyPool::build(Family::Sales, factory, &config(3))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PoolError::Initialization {
                family: Family::Sales,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_status_serializes_lowercase_family() {
        let pool = pool(2).await;
        let json = serde_json::to_value(pool.status()).unwrap();
        assert_eq!(json["family"], "users");
        assert_eq!(json["available"], 2);
        assert_eq!(json["closed"], false);
    }

    #[tokio::test]
    async fn test_acquire_release_keeps_counts() {
        let pool = pool(2).await;
        let a = pool.acquire().await.unwrap();
        assert_eq!(pool.status().checked_out, 1);
        assert_eq!(pool.status().available, 1);

        pool.release(a).unwrap();
        let status = pool.status();
        assert_eq!(status.checked_out, 0);
        assert_eq!(status.available, 2);
    }

    #[tokio::test]
    async fn test_handles_are_fifo() {
        let pool = pool(2).await;
        let first = pool.acquire().await.unwrap();
        let first_slot = first.slot();
        pool.release(first).unwrap();

        // The other slot was queued ahead of the one just returned
        let next = pool.acquire().await.unwrap();
        assert_ne!(next.slot(), first_slot);
    }

    #[tokio::test]
    async fn test_failed_build_closes_built_handles() {
        let factory = Arc::new(Factory {
            fail_from: Some(2),
            ..Factory::default()
        });
        let err = FamilyPool::build(Family::Products, Arc::clone(&factory), &config(3))
            .await
            .unwrap_err();

        assert!(matches!(err, PoolError::Initialization { slot: 2, .. }));
        assert_eq!(factory.closed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_capacity_rejected() {
        let err = FamilyPool::build(Family::Users, Arc::new(Factory::default()), &config(0))
            .await
            .unwrap_err();
        assert!(matches!(err, PoolError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_fail_fast_on_exhausted_pool() {
        let pool = pool(1).await;
        let _held = pool.acquire().await.unwrap();

        let err = pool.acquire_with(AcquireMode::FailFast).await.unwrap_err();
        assert!(matches!(
            err,
            PoolError::Exhausted {
                waited: Duration::ZERO,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_wait_times_out() {
        let pool = pool(1).await;
        let _held = pool.acquire().await.unwrap();

        let err = pool
            .acquire_with(AcquireMode::Wait(Duration::from_millis(20)))
            .await
            .unwrap_err();
        assert!(err.is_exhausted());
    }

    #[tokio::test]
    async fn test_checkout_releases_on_drop() {
        let pool = pool(1).await;
        {
            let checkout = pool.checkout().await.unwrap();
            assert_eq!(checkout.tag().family(), Family::Users);
            assert_eq!(pool.status().checked_out, 1);
        }
        assert_eq!(pool.status().available, 1);
    }

    #[tokio::test]
    async fn test_double_release_rejected() {
        let pool = pool(2).await;
        let handle = pool.acquire().await.unwrap();
        let copy = handle.clone();

        pool.release(handle).unwrap();
        let err = pool.release(copy).unwrap_err();
        assert!(matches!(err, PoolError::DoubleRelease { slot: _, .. }));

        let status = pool.status();
        assert_eq!(status.available, 2);
        assert_eq!(status.checked_out, 0);
    }

    #[tokio::test]
    async fn test_stale_copy_rejected_after_reacquire() {
        let pool = pool(1).await;
        let first = pool.acquire().await.unwrap();
        let stale = first.clone();
        pool.release(first).unwrap();

        let current = pool.acquire().await.unwrap();
        assert_eq!(current.slot(), stale.slot());
        assert_ne!(current.tag().generation(), stale.tag().generation());

        let err = pool.release(stale).unwrap_err();
        assert!(matches!(err, PoolError::DoubleRelease { slot: 0, .. }));

        let status = pool.status();
        assert_eq!(status.available, 0);
        assert_eq!(status.checked_out, 1);
        assert!(pool.acquire_with(AcquireMode::FailFast).await.unwrap_err().is_exhausted());

        pool.release(current).unwrap();
        assert_eq!(pool.status().available, 1);
    }

    #[tokio::test]
    async fn test_foreign_handle_rejected() {
        let ours = pool(1).await;
        let theirs = pool(1).await;
        let handle = theirs.acquire().await.unwrap();

        let err = ours.release(handle).unwrap_err();
        assert!(matches!(err, PoolError::ForeignHandle { .. }));
        assert_eq!(ours.status().available, 1);
        assert_eq!(theirs.status().checked_out, 1);
    }

    #[tokio::test]
    async fn test_broken_handle_is_rebuilt() {
        let pool = pool(1).await;
        let handle = pool.acquire().await.unwrap();
        let original = handle.serial;
        handle.mark_broken();
        pool.release(handle).unwrap();

        let fresh = pool
            .acquire_with(AcquireMode::Wait(Duration::from_secs(1)))
            .await
            .unwrap();
        assert_ne!(fresh.serial, original);
        assert!(!fresh.is_broken());
        assert_eq!(fresh.slot(), 0);
    }

    #[tokio::test]
    async fn test_failed_rebuild_quarantines_slot() {
        let factory = Arc::new(Factory {
            fail_from: Some(2),
            ..Factory::default()
        });
        let pool = FamilyPool::build(Family::Refunds, factory, &config(2))
            .await
            .unwrap();

        let handle = pool.acquire().await.unwrap();
        handle.mark_broken();
        pool.release(handle).unwrap();

        for _ in 0..100 {
            if pool.status().quarantined == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let status = pool.status();
        assert_eq!(status.quarantined, 1);
        assert_eq!(status.available, 1);
        assert!(status.is_degraded());

        // The remaining slot still serves callers
        let _ok = pool.acquire_with(AcquireMode::FailFast).await.unwrap();
        assert!(pool.acquire_with(AcquireMode::FailFast).await.is_err());
    }

    #[tokio::test]
    async fn test_panicking_rebuild_quarantines_slot() {
        let factory = Arc::new(Factory {
            panic_from: Some(2),
            ..Factory::default()
        });
        let pool = FamilyPool::build(Family::Discounts, factory, &config(2))
            .await
            .unwrap();

        let handle = pool.acquire().await.unwrap();
        handle.mark_broken();
        pool.release(handle).unwrap();

        for _ in 0..100 {
            if pool.status().quarantined == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let status = pool.status();
        assert_eq!(status.rebuilding, 0);
        assert_eq!(status.quarantined, 1);
        assert_eq!(status.available, 1);
        assert!(status.is_degraded());
    }

    #[tokio::test]
    async fn test_close_fails_acquirers_and_retires_handles() {
        let pool = pool(2).await;
        let held = pool.acquire().await.unwrap();

        pool.close().await;
        let err = pool.acquire().await.unwrap_err();
        assert!(matches!(err, PoolError::Closed { .. }));

        pool.release(held).unwrap();
        let status = pool.status();
        assert!(status.closed);
        assert_eq!(pool.shared.factory.closed.load(Ordering::SeqCst), 1);
        assert_eq!(status.retired, 2);
        assert_eq!(status.available, 0);
    }
}
