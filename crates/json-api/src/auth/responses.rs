//! Account and token response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{auth::IssuedApiToken, domain::users::records::UserRecord};

/// Identity projection of an account.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// Account identifier
    pub id: Uuid,

    pub username: String,

    pub email: String,

    /// Whether the account may use administrative endpoints
    pub is_staff: bool,
}

impl From<&UserRecord> for UserResponse {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.uuid.into_uuid(),
            username: user.username.clone(),
            email: user.email.clone(),
            is_staff: user.is_staff,
        }
    }
}

/// Freshly issued token together with the account it authenticates.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    /// Opaque API token; send as `Authorization: Bearer <token>`
    pub token: String,

    pub user: UserResponse,
}

impl TokenResponse {
    pub(crate) fn new(issued: IssuedApiToken, user: &UserRecord) -> Self {
        Self {
            token: issued.token,
            user: user.into(),
        }
    }
}
