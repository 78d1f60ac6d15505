//! Order projections.
//!
//! Buyers see their own order with the product resolved; staff additionally
//! see who placed it.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::details::{AdminOrderDetails, OrderDetails};

/// Order as shown to its owner.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub id: Uuid,

    /// Product identifier
    pub product: Uuid,

    pub product_name: String,

    /// Current product price, e.g. `"15.99"`
    pub product_price: String,

    pub product_image: String,

    pub card_last_four: String,

    /// `paid` or `failed`
    pub status: String,

    pub created_at: String,
}

/// Order as shown to staff.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminOrderResponse {
    pub id: Uuid,

    /// Owning account identifier
    pub user: Uuid,

    pub username: String,

    pub user_email: String,

    pub product: Uuid,

    pub product_name: String,

    pub product_price: String,

    pub product_image: String,

    pub card_last_four: String,

    pub status: String,

    pub created_at: String,
}

pub(crate) fn owner_projection(details: &OrderDetails) -> OrderResponse {
    let OrderDetails { order, product } = details;

    OrderResponse {
        id: order.uuid.into_uuid(),
        product: product.uuid.into_uuid(),
        product_name: product.name.clone(),
        product_price: product.price.to_string(),
        product_image: product.image_url.clone(),
        card_last_four: order.card_last_four.clone(),
        status: order.status.to_string(),
        created_at: order.created_at.to_string(),
    }
}

pub(crate) fn admin_projection(details: &AdminOrderDetails) -> AdminOrderResponse {
    let AdminOrderDetails {
        order,
        product,
        owner,
    } = details;

    AdminOrderResponse {
        id: order.uuid.into_uuid(),
        user: owner.uuid.into_uuid(),
        username: owner.username.clone(),
        user_email: owner.email.clone(),
        product: product.uuid.into_uuid(),
        product_name: product.name.clone(),
        product_price: product.price.to_string(),
        product_image: product.image_url.clone(),
        card_last_four: order.card_last_four.clone(),
        status: order.status.to_string(),
        created_at: order.created_at.to_string(),
    }
}
