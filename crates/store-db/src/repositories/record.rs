//! How each entity binds into its family's prepared statements

use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use store_core::{Discount, Inform, Product, Refund, Sale, StoreEntity, User};

use crate::handle::{PgQuery, PgQueryAs};
use crate::models::{
    DiscountModel, InformModel, ProductModel, RefundModel, SaleModel, UserModel,
};

/// Row returned by every `Add` statement
pub type InsertedId = (i64,);

/// An entity persisted through its family's prepared statements
///
/// Binders take owned copies of the fields so the resulting query does not
/// borrow the entity. The `Modify` statement takes the id as `$1` followed by
/// the same columns as `Add`, with `updated_at` last.
pub trait PgRecord: StoreEntity {
    type Model: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self>;

    fn bind_add<'q>(&self, query: PgQueryAs<'q, InsertedId>) -> PgQueryAs<'q, InsertedId>;

    fn bind_modify<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q>;
}

impl PgRecord for User {
    type Model = UserModel;

    fn bind_add<'q>(&self, query: PgQueryAs<'q, InsertedId>) -> PgQueryAs<'q, InsertedId> {
        query
            .bind(self.name.clone())
            .bind(self.email.clone())
            .bind(self.role.as_str())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_modify<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.name.clone())
            .bind(self.email.clone())
            .bind(self.role.as_str())
            .bind(Utc::now())
    }
}

impl PgRecord for Product {
    type Model = ProductModel;

    fn bind_add<'q>(&self, query: PgQueryAs<'q, InsertedId>) -> PgQueryAs<'q, InsertedId> {
        query
            .bind(self.name.clone())
            .bind(self.description.clone())
            .bind(self.price_cents)
            .bind(self.stock)
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_modify<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.name.clone())
            .bind(self.description.clone())
            .bind(self.price_cents)
            .bind(self.stock)
            .bind(Utc::now())
    }
}

impl PgRecord for Sale {
    type Model = SaleModel;

    fn bind_add<'q>(&self, query: PgQueryAs<'q, InsertedId>) -> PgQueryAs<'q, InsertedId> {
        query
            .bind(self.name.clone())
            .bind(self.user_id)
            .bind(self.product_id)
            .bind(self.quantity)
            .bind(self.total_cents)
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_modify<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.name.clone())
            .bind(self.user_id)
            .bind(self.product_id)
            .bind(self.quantity)
            .bind(self.total_cents)
            .bind(Utc::now())
    }
}

impl PgRecord for Discount {
    type Model = DiscountModel;

    fn bind_add<'q>(&self, query: PgQueryAs<'q, InsertedId>) -> PgQueryAs<'q, InsertedId> {
        query
            .bind(self.name.clone())
            .bind(self.product_id)
            .bind(self.percent)
            .bind(self.active)
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_modify<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.name.clone())
            .bind(self.product_id)
            .bind(self.percent)
            .bind(self.active)
            .bind(Utc::now())
    }
}

impl PgRecord for Refund {
    type Model = RefundModel;

    fn bind_add<'q>(&self, query: PgQueryAs<'q, InsertedId>) -> PgQueryAs<'q, InsertedId> {
        query
            .bind(self.name.clone())
            .bind(self.sale_id)
            .bind(self.amount_cents)
            .bind(self.reason.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_modify<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.name.clone())
            .bind(self.sale_id)
            .bind(self.amount_cents)
            .bind(self.reason.clone())
            .bind(Utc::now())
    }
}

impl PgRecord for Inform {
    type Model = InformModel;

    fn bind_add<'q>(&self, query: PgQueryAs<'q, InsertedId>) -> PgQueryAs<'q, InsertedId> {
        query
            .bind(self.name.clone())
            .bind(self.body.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_modify<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id)
            .bind(self.name.clone())
            .bind(self.body.clone())
            .bind(Utc::now())
    }
}
