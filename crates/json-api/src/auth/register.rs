//! Register Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::users::{data::NewUser, records::UserUuid};

use crate::{
    auth::{TokenResponse, auth_status_error},
    extensions::*,
    state::State,
};

/// Register Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct RegisterRequest {
    pub username: String,

    /// Optional contact address
    pub email: String,

    pub password: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser {
            uuid: UserUuid::new(),
            username: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

/// Register Handler
///
/// Creates an account and returns a token for it. The account and its token
/// are written together, so a failed registration leaves nothing behind.
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields or username taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let registered = state
        .app
        .auth
        .register(json.into_inner().into())
        .await
        .map_err(auth_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(TokenResponse::new(registered.token, &registered.user)))
}
