//! Auth data models.

use jiff::Timestamp;

use crate::{
    auth::ApiTokenVersion,
    domain::users::records::{UserRecord, UserUuid},
    uuids::TypedUuid,
};

/// API Token UUID
pub type ApiTokenUuid = TypedUuid<ApiTokenMetadata>;

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    /// Token format/hash version.
    pub version: ApiTokenVersion,

    /// SHA-256 digest of the canonical verifier input.
    pub token_hash: String,

    /// Account that owns this token.
    pub user: UserRecord,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: ApiTokenUuid,
    pub user_uuid: UserUuid,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: ApiTokenUuid,
    pub user_uuid: UserUuid,
    pub version: ApiTokenVersion,
    pub token_hash: String,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}

/// A newly created account together with its first token.
#[derive(Debug, Clone)]
pub struct RegisteredAccount {
    pub user: UserRecord,
    pub token: IssuedApiToken,
}
