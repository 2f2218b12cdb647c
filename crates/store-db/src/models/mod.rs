//! Database models - row shapes returned by the prepared statements

mod catalogue;
mod ledger;
mod user;

pub use catalogue::{DiscountModel, ProductModel};
pub use ledger::{InformModel, RefundModel, SaleModel};
pub use user::UserModel;
