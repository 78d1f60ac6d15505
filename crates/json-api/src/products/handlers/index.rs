//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, products::get::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product in the catalogue, ordered by name.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::domain::products::{ProductsServiceError, records::ProductUuid};

    use crate::test_helpers::{TestServices, make_product};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        services.anonymous(Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(services))
            .await
            .take_json()
            .await?;

        assert!(response.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_in_service_order() -> TestResult {
        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .return_once(move || Ok(vec![make_product(uuid_a), make_product(uuid_b)]));

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(services))
            .await
            .take_json()
            .await?;

        let ids: Vec<Uuid> = response.iter().map(|product| product.id).collect();

        assert_eq!(ids, vec![uuid_a.into_uuid(), uuid_b.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_service_error_returns_500() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::InvalidData));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
