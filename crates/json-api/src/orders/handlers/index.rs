//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        projections::{OrderResponse, owner_projection},
    },
    state::State,
};

/// Order Index Handler
///
/// Returns the caller's orders, newest first.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Caller's orders"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.identity_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders_for(user.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.iter().map(owner_projection).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{orders::records::OrderStatus, products::records::ProductUuid};

    use crate::test_helpers::{TEST_BUYER_UUID, TestServices, make_order, make_product};

    use super::*;

    fn route() -> Router {
        Router::with_path("orders").get(handler)
    }

    #[tokio::test]
    async fn test_index_lists_only_callers_orders_in_service_order() -> TestResult {
        let product = make_product(ProductUuid::new());
        let newest = make_order(TEST_BUYER_UUID, &product, OrderStatus::Failed, "9012");
        let oldest = make_order(TEST_BUYER_UUID, &product, OrderStatus::Paid, "1111");
        let expected = vec![newest.order.uuid.into_uuid(), oldest.order.uuid.into_uuid()];
        let mut services = TestServices::default();

        services
            .orders
            .expect_list_orders_for()
            .once()
            .withf(|user| *user == TEST_BUYER_UUID)
            .return_once(move |_| Ok(vec![newest, oldest]));

        let response: Vec<OrderResponse> = TestClient::get("http://example.com/orders")
            .send(&services.as_buyer(route()))
            .await
            .take_json()
            .await?;

        let ids: Vec<_> = response.iter().map(|order| order.id).collect();

        assert_eq!(ids, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_returns_empty_list() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_list_orders_for()
            .once()
            .return_once(|_| Ok(vec![]));

        let response: Vec<OrderResponse> = TestClient::get("http://example.com/orders")
            .send(&services.as_buyer(route()))
            .await
            .take_json()
            .await?;

        assert!(response.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_anonymous_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_list_orders_for().never();

        let res = TestClient::get("http://example.com/orders")
            .send(&services.anonymous(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
