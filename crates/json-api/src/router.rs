//! App Router

use salvo::Router;

use crate::{admin, auth, orders, products};

/// Catalogue and account routes that need no token.
fn public_router() -> Router {
    Router::new()
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(auth::register::handler))
                .push(Router::with_path("login").post(auth::login::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
}

/// Routes behind the token middleware.
fn authenticated_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(Router::with_path("auth/me").get(auth::me::handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(Router::with_path("admin/orders").get(admin::orders::handler))
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(public_router())
        .push(authenticated_router())
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::AUTHORIZATION,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use storefront_app::{auth::AuthServiceError, domain::products::records::ProductUuid};

    use crate::test_helpers::{TestServices, buyer, make_product};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(services.into_state()))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_products_are_public() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product(ProductUuid::new())]));

        services.auth.expect_authenticate_bearer().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body.as_array().map(Vec::len), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn test_orders_require_token() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_list_orders_for().never();

        let res = TestClient::get("http://example.com/orders")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected_before_handler() -> TestResult {
        let mut services = TestServices::default();

        services
            .auth
            .expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));

        services.orders.expect_list_all_orders().never();

        let res = TestClient::get("http://example.com/admin/orders")
            .add_header(AUTHORIZATION, "Bearer sf_v1_bogus", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_orders_forbidden_for_buyer_token() -> TestResult {
        let mut services = TestServices::default();

        services
            .auth
            .expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(buyer()));

        services.orders.expect_list_all_orders().never();

        let res = TestClient::get("http://example.com/admin/orders")
            .add_header(AUTHORIZATION, "Token sf_v1_token", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_buyer_token_reaches_orders() -> TestResult {
        let mut services = TestServices::default();

        services
            .auth
            .expect_authenticate_bearer()
            .once()
            .withf(|token| token == "sf_v1_token")
            .return_once(|_| Ok(buyer()));

        services
            .orders
            .expect_list_orders_for()
            .once()
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/orders")
            .add_header(AUTHORIZATION, "Bearer sf_v1_token", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
