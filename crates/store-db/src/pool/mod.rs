//! Bounded per-family handle pools
//!
//! Each [`FamilyPool`] owns `N` pre-built handles and a FIFO-fair counting
//! semaphore whose tokens always equal the number of available handles.
//! A caller acquires a token, takes a handle out of the available queue,
//! uses it exclusively, and releases it. Releases are checked: a handle from
//! another pool, or one whose checkout was already returned (tracked by a
//! per-slot generation in its [`HandleTag`]), is rejected and the pool is left
//! untouched.
//!
//! A handle reporting itself broken on release is not put back. Its slot is
//! rebuilt in the background through the [`ResourceFactory`]; after the
//! configured number of failed attempts the slot is quarantined and the
//! family reports itself degraded. At any time
//! `checked_out + available + rebuilding + quarantined + retired == N`.

mod config;
mod error;
mod family;
mod registry;
mod resource;
mod shared;

pub use config::{AcquireMode, PoolConfig};
pub use error::{PoolError, PoolResult};
pub use family::{Checkout, FamilyPool, PoolStatus};
pub use registry::{PoolRegistry, RegistryCell};
pub use resource::{HandleTag, Pooled, PooledResource, ResourceFactory};
pub use shared::shared_registry;
