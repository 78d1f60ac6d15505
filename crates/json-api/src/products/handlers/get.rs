//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::records::{ProductRecord, ProductUuid};

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub name: String,

    pub description: String,

    /// Decimal price with two fraction digits, e.g. `"15.99"`
    pub price: String,

    /// Image path or URL
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into_uuid(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            image_url: product.image_url,
        }
    }
}

/// Get Product Handler
///
/// Returns a product. An id that is not a UUID cannot name a product and is 404.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Ok(uuid) = Uuid::parse_str(&product.into_inner()) else {
        return Err(StatusError::not_found().brief("Product not found."));
    };

    let product = state
        .app
        .products
        .get_product(ProductUuid::from_uuid(uuid))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
