//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found.")
        }
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found."),
        OrdersServiceError::InvalidCardNumber => {
            StatusError::bad_request().brief("Card number must be exactly 16 digits.")
        }
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists."),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload.")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
