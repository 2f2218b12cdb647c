//! Model → entity conversions

use store_core::{Discount, Inform, Product, Refund, Sale, User, UserRole};
use tracing::warn;

use crate::models::{
    DiscountModel, InformModel, ProductModel, RefundModel, SaleModel, UserModel,
};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        let role = model.role.parse().unwrap_or_else(|_| {
            warn!(user_id = model.id, role = %model.role, "Unknown role, treating as customer");
            UserRole::Customer
        });

        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price_cents: model.price_cents,
            stock: model.stock,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<DiscountModel> for Discount {
    fn from(model: DiscountModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            product_id: model.product_id,
            percent: model.percent,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SaleModel> for Sale {
    fn from(model: SaleModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            user_id: model.user_id,
            product_id: model.product_id,
            quantity: model.quantity,
            total_cents: model.total_cents,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<RefundModel> for Refund {
    fn from(model: RefundModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            sale_id: model.sale_id,
            amount_cents: model.amount_cents,
            reason: model.reason,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<InformModel> for Inform {
    fn from(model: InformModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_role_mapping() {
        let now = Utc::now();
        let model = UserModel {
            id: 1,
            name: "carol".to_string(),
            email: "carol@example.com".to_string(),
            role: "seller".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(User::from(model.clone()).role, UserRole::Seller);

        let unknown = UserModel {
            role: "wizard".to_string(),
            ..model
        };
        assert_eq!(User::from(unknown).role, UserRole::Customer);
    }

    #[test]
    fn test_discount_mapping() {
        let now = Utc::now();
        let discount = Discount::from(DiscountModel {
            id: 4,
            name: "HALF".to_string(),
            product_id: 9,
            percent: 50,
            active: true,
            created_at: now,
            updated_at: now,
        });
        assert_eq!(discount.apply(800), 400);
    }
}
