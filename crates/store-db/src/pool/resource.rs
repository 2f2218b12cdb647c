//! Pooled resources and the factory capability that builds them

use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use store_core::Family;
use uuid::Uuid;

/// A value that can live in a [`FamilyPool`](super::FamilyPool)
#[async_trait]
pub trait PooledResource: Send + Sized + 'static {
    /// Whether the underlying connection is known to be unusable.
    ///
    /// Checked on release; a broken resource is discarded and its slot rebuilt.
    fn is_broken(&self) -> bool {
        false
    }

    /// Close the underlying connection on pool shutdown
    async fn close(self) {}
}

/// Builds fresh resources for a family, at startup and when rebuilding a slot
#[async_trait]
pub trait ResourceFactory: Send + Sync + 'static {
    type Resource: PooledResource;

    async fn build(&self, family: Family, slot: usize) -> anyhow::Result<Self::Resource>;
}

/// Identity of a pooled handle: the pool it came from, its slot, and which
/// checkout of that slot it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleTag {
    pool_id: Uuid,
    family: Family,
    slot: usize,
    generation: u64,
}

impl HandleTag {
    pub(crate) fn new(pool_id: Uuid, family: Family, slot: usize) -> Self {
        Self {
            pool_id,
            family,
            slot,
            generation: 0,
        }
    }

    pub fn pool_id(&self) -> Uuid {
        self.pool_id
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Checkout counter of the slot when this handle was acquired
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A resource checked out of a pool, tagged with where it belongs
///
/// A clone shares the tag of the checkout it was made from. The pool accepts
/// one release per checkout, so once any copy is returned every other copy is
/// stale and its release is rejected.
#[derive(Debug, Clone)]
pub struct Pooled<R> {
    tag: HandleTag,
    resource: R,
}

impl<R> Pooled<R> {
    pub(crate) fn new(tag: HandleTag, resource: R) -> Self {
        Self { tag, resource }
    }

    pub fn tag(&self) -> HandleTag {
        self.tag
    }

    pub fn family(&self) -> Family {
        self.tag.family
    }

    pub fn slot(&self) -> usize {
        self.tag.slot
    }

    pub(crate) fn stamp(&mut self, generation: u64) {
        self.tag.generation = generation;
    }

    pub(crate) fn into_resource(self) -> R {
        self.resource
    }
}

impl<R> Deref for Pooled<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.resource
    }
}

impl<R> DerefMut for Pooled<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.resource
    }
}
