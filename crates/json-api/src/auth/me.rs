//! Current Account Handler

use salvo::prelude::*;

use crate::{auth::UserResponse, extensions::*};

/// Current Account Handler
///
/// Returns the account the request's token belongs to.
#[endpoint(
    tags("auth"),
    summary = "Current Account",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let user = depot.identity_or_401()?;

    Ok(Json(user.into()))
}
