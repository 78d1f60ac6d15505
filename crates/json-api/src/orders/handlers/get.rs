//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::orders::records::OrderUuid;

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        projections::{OrderResponse, owner_projection},
    },
    state::State,
};

/// Get Order Handler
///
/// Returns one of the caller's orders. Orders owned by someone else are 404.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.identity_or_401()?;

    let Ok(uuid) = Uuid::parse_str(&order.into_inner()) else {
        return Err(StatusError::not_found().brief("Order not found."));
    };

    let details = state
        .app
        .orders
        .get_order_for(user.uuid, OrderUuid::from_uuid(uuid))
        .await
        .map_err(into_status_error)?;

    Ok(Json(owner_projection(&details)))
}
