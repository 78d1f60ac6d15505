//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::users::data::Credentials;

use crate::{
    auth::{TokenResponse, auth_status_error, users_status_error},
    extensions::*,
    state::State,
};

/// Login Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials {
            username: request.username,
            password: request.password,
        }
    }
}

/// Login Handler
///
/// Exchanges a username and password for a fresh token.
#[endpoint(
    tags("auth"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .verify_credentials(json.into_inner().into())
        .await
        .map_err(users_status_error)?;

    let issued = state
        .app
        .auth
        .issue_token(user.uuid)
        .await
        .map_err(auth_status_error)?;

    Ok(Json(TokenResponse::new(issued, &user)))
}
