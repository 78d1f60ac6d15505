//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    auth::{
        ApiTokenUuid, ApiTokenVersion, AuthServiceError, IssuedApiToken, NewApiToken,
        RegisteredAccount, format_api_token, generate_api_token_secret, parse_api_token,
        repository::PgAuthRepository, token_verifier_hash, verifier_hashes_match,
    },
    database::Db,
    domain::users::{
        PgUsersService,
        data::NewUser,
        records::{UserRecord, UserUuid},
    },
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
    users: PgUsersService,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            repository: PgAuthRepository::new(db.pool().clone()),
            users: PgUsersService::new(db.clone()),
            db,
        }
    }

    async fn insert_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = ApiTokenUuid::new();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let metadata = self
            .repository
            .create_api_token(
                tx,
                &NewApiToken {
                    uuid: token_uuid,
                    user_uuid: user,
                    version,
                    token_hash: token_verifier_hash(token_uuid, version, user, &secret),
                },
            )
            .await?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        self.repository
            .revoke_api_token(token_uuid)
            .await
            .map(|record| record.is_some())
            .map_err(AuthServiceError::from)
    }

    /// Revoke every active token belonging to `username`, returning how many were revoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_user_api_tokens(&self, username: &str) -> Result<u64, AuthServiceError> {
        let revoked = self.repository.revoke_user_api_tokens(username).await?;

        info!(username, revoked, "api tokens revoked");

        Ok(revoked)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserRecord, AuthServiceError> {
        let parsed_token = parse_api_token(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_api_token_by_uuid(parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if token.version != parsed_token.version {
            return Err(AuthServiceError::NotFound);
        }

        let expected = token_verifier_hash(
            parsed_token.token_uuid,
            parsed_token.version,
            token.user.uuid,
            &parsed_token.secret,
        );

        if !verifier_hashes_match(&expected, &token.token_hash) {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort; a failed touch does not fail authentication.
        let _touch_result = self
            .repository
            .touch_api_token_last_used(parsed_token.token_uuid)
            .await;

        Ok(token.user)
    }

    async fn issue_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let issued = self.insert_token(&mut tx, user).await?;

        tx.commit().await?;

        Ok(issued)
    }

    async fn register(&self, user: NewUser) -> Result<RegisteredAccount, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.users.create_user(&mut tx, user).await?;
        let token = self.insert_token(&mut tx, user.uuid).await?;

        tx.commit().await?;

        info!(user = %user.uuid, username = %user.username, "user registered");

        Ok(RegisteredAccount { user, token })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the account it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserRecord, AuthServiceError>;

    /// Issue a fresh token for `user`. The raw token is only ever returned here.
    async fn issue_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError>;

    /// Create an account and its first token in one transaction; either both persist or neither.
    async fn register(&self, user: NewUser) -> Result<RegisteredAccount, AuthServiceError>;
}
