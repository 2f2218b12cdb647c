//! Domain entities - the store's core business objects

mod discount;
mod inform;
mod product;
mod refund;
mod sale;
mod user;

pub use discount::Discount;
pub use inform::Inform;
pub use product::Product;
pub use refund::Refund;
pub use sale::Sale;
pub use user::{User, UserRole};

use crate::value_objects::Family;

/// Common shape of every persisted store entity
///
/// Each entity belongs to exactly one [`Family`] and is addressable both by
/// numeric id and by a unique name (username, product name, receipt code...).
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Family whose handles serve this entity
    const FAMILY: Family;

    fn id(&self) -> i64;

    fn name(&self) -> &str;
}
