//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::{
    orders::{
        data::NewOrder,
        details::PlacedOrder,
        records::{OrderStatus, OrderUuid},
    },
    products::records::ProductUuid,
};

use crate::{
    extensions::*,
    observability::record_order_placed,
    orders::{errors::into_status_error, projections::owner_projection},
    state::State,
};

/// Create Order Request
///
/// Fields are kept as raw JSON so a missing or malformed product always
/// resolves to 404 before the card is looked at.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CreateOrderRequest {
    /// Product UUID as a string
    pub product_id: Value,

    /// 16-digit card number
    pub card_number: Value,
}

impl CreateOrderRequest {
    /// The referenced product, if `product_id` is a UUID string.
    fn product(&self) -> Option<ProductUuid> {
        let id = self.product_id.as_str()?;

        Uuid::parse_str(id.trim()).ok().map(ProductUuid::from_uuid)
    }

    /// The card number as submitted. Anything but a string or number is empty.
    fn card_number(&self) -> String {
        match &self.card_number {
            Value::String(number) => number.clone(),
            Value::Number(number) => number.to_string(),
            _ => String::new(),
        }
    }
}

/// Body returned when the simulated payment is declined.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentDeclinedResponse {
    pub error: String,

    /// The failed order that was recorded
    pub order_id: Uuid,
}

/// Create Order Handler
///
/// Places a single-product order. A declined payment still records a
/// `failed` order and answers 402.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order paid"),
        (status_code = StatusCode::PAYMENT_REQUIRED, description = "Payment declined"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid card number"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.identity_or_401()?;

    // Empty, non-JSON and non-object bodies all read as "no product".
    let request = req
        .parse_json::<CreateOrderRequest>()
        .await
        .unwrap_or_default();

    let Some(product) = request.product() else {
        return Err(StatusError::not_found().brief("Product not found."));
    };

    let placed = state
        .app
        .orders
        .place_order(
            user.uuid,
            NewOrder {
                uuid: OrderUuid::new(),
                product,
                card_number: request.card_number(),
            },
        )
        .await
        .map_err(into_status_error)?;

    match placed {
        PlacedOrder::Paid(details) => {
            record_order_placed(OrderStatus::Paid.as_str());

            res.add_header(LOCATION, format!("/orders/{}", details.order.uuid), true)
                .or_500("failed to set location header")?
                .render(Json(owner_projection(&details)));

            Ok(StatusCode::CREATED)
        }
        PlacedOrder::Declined(details) => {
            record_order_placed(OrderStatus::Failed.as_str());

            res.render(Json(PaymentDeclinedResponse {
                error: "Payment declined".to_string(),
                order_id: details.order.uuid.into_uuid(),
            }));

            Ok(StatusCode::PAYMENT_REQUIRED)
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::orders::OrdersServiceError;

    use crate::{
        orders::projections::OrderResponse,
        test_helpers::{TEST_BUYER_UUID, TestServices, make_order, make_product},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("orders").post(handler)
    }

    #[tokio::test]
    async fn test_create_order_paid_returns_201_with_projection() -> TestResult {
        let product = make_product(ProductUuid::new());
        let product_uuid = product.uuid;
        let mut services = TestServices::default();

        services
            .orders
            .expect_place_order()
            .once()
            .withf(move |user, order| {
                *user == TEST_BUYER_UUID
                    && order.product == product_uuid
                    && order.card_number == "4111111111111111"
            })
            .return_once(move |user, _| {
                Ok(PlacedOrder::Paid(make_order(
                    user,
                    &product,
                    OrderStatus::Paid,
                    "1111",
                )))
            });

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "product_id": product_uuid.to_string(),
                "card_number": "4111111111111111",
            }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let location = res
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.status, "paid");
        assert_eq!(body.card_last_four, "1111");
        assert_eq!(body.product, product_uuid.into_uuid());
        assert_eq!(body.product_price, "15.99");
        assert_eq!(location, Some(format!("/orders/{}", body.id)));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_declined_returns_402_with_order_id() -> TestResult {
        let product = make_product(ProductUuid::new());
        let product_uuid = product.uuid;
        let details = make_order(TEST_BUYER_UUID, &product, OrderStatus::Failed, "9012");
        let order_uuid = details.order.uuid;
        let mut services = TestServices::default();

        services
            .orders
            .expect_place_order()
            .once()
            .withf(|_, order| order.card_number == "0000123456789012")
            .return_once(move |_, _| Ok(PlacedOrder::Declined(details)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "product_id": product_uuid.to_string(),
                "card_number": "0000123456789012",
            }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::PAYMENT_REQUIRED));

        let body: PaymentDeclinedResponse = res.take_json().await?;

        assert_eq!(body.error, "Payment declined");
        assert_eq!(body.order_id, order_uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_invalid_card_returns_400() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_place_order()
            .once()
            .withf(|_, order| order.card_number == "123")
            .return_once(|_, _| Err(OrdersServiceError::InvalidCardNumber));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "product_id": ProductUuid::new().to_string(),
                "card_number": "123",
            }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_unknown_product_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_place_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "product_id": ProductUuid::new().to_string(),
                "card_number": "4111111111111111",
            }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_unparseable_product_returns_404_without_placing() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": "99999", "card_number": "4111111111111111" }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_missing_product_returns_404_without_placing() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "card_number": "4111111111111111" }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_missing_card_is_passed_as_empty() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_place_order()
            .once()
            .withf(|_, order| order.card_number.is_empty())
            .return_once(|_, _| Err(OrdersServiceError::InvalidCardNumber));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": ProductUuid::new().to_string() }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_empty_body_returns_404_without_placing() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_numeric_product_returns_404_without_placing() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": 99999, "card_number": "4111111111111111" }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_form_body_returns_404_without_placing() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .raw_form("product_id=99999&card_number=4111111111111111")
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_numeric_card_is_passed_as_digits() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_place_order()
            .once()
            .withf(|_, order| order.card_number == "4111111111111111")
            .return_once(|_, _| Err(OrdersServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "product_id": ProductUuid::new().to_string(),
                "card_number": 4_111_111_111_111_111_u64,
            }))
            .send(&services.as_buyer(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_anonymous_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "product_id": ProductUuid::new().to_string(),
                "card_number": "4111111111111111",
            }))
            .send(&services.anonymous(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
