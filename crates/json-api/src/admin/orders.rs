//! Admin Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::projections::{AdminOrderResponse, admin_projection},
    state::State,
};

/// Admin Order Index Handler
///
/// Returns every order across all accounts, newest first, with owner details.
#[endpoint(
    tags("admin"),
    summary = "List All Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "All orders"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Caller is not staff"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<AdminOrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let orders = state
        .app
        .orders
        .list_all_orders()
        .await
        .or_500("failed to fetch orders")?;

    Ok(Json(orders.iter().map(admin_projection).collect()))
}
