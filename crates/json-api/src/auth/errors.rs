//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::{auth::AuthServiceError, domain::users::UsersServiceError};

pub(crate) fn users_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::UsernameTaken => {
            StatusError::bad_request().brief("A user with that username already exists.")
        }
        UsersServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Username and password are required.")
        }
        UsersServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid credentials.")
        }
        UsersServiceError::NotFound => StatusError::not_found(),
        UsersServiceError::PasswordHash(source) => {
            error!("failed to hash password: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!("user storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn auth_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::NotFound => StatusError::unauthorized().brief("Invalid token."),
        AuthServiceError::Sql(source) => {
            error!("failed to validate api token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to process api token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Registration(source) => users_status_error(source),
    }
}
