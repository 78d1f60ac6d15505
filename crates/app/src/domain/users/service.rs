//! Users service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::users::{
        data::{Credentials, NewUser},
        errors::UsersServiceError,
        password::{hash_password, verify_password},
        records::{UserRecord, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }

    /// Validate, hash and insert an account inside `tx`. The caller commits.
    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: NewUser,
    ) -> Result<UserRecord, UsersServiceError> {
        let username = user.username.trim();

        if username.is_empty() || user.password.is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let password_hash =
            hash_password(&user.password).map_err(UsersServiceError::PasswordHash)?;

        let created = self
            .repository
            .create_user(tx, user.uuid, username, user.email.trim(), &password_hash)
            .await?;

        Ok(created)
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn register(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.create_user(&mut tx, user).await?;

        tx.commit().await?;

        info!(user = %created.uuid, username = %created.username, "user registered");

        Ok(created)
    }

    async fn verify_credentials(
        &self,
        credentials: Credentials,
    ) -> Result<UserRecord, UsersServiceError> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .find_user_by_username(&mut tx, credentials.username.trim())
            .await?;

        tx.commit().await?;

        let Some(found) = found else {
            return Err(UsersServiceError::InvalidCredentials);
        };

        if !verify_password(&credentials.password, &found.password_hash) {
            return Err(UsersServiceError::InvalidCredentials);
        }

        Ok(found.user)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn set_staff(
        &self,
        username: &str,
        is_staff: bool,
    ) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .set_user_staff(&mut tx, username, is_staff)
            .await?;

        tx.commit().await?;

        info!(user = %user.uuid, is_staff, "user staff flag changed");

        Ok(user)
    }
}

#[automock]
#[async_trait]
/// Account registration and credential checks.
pub trait UsersService: Send + Sync {
    /// Creates an account. Usernames are unique; username and password are required.
    async fn register(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Resolves a username/password pair to its account.
    async fn verify_credentials(
        &self,
        credentials: Credentials,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single account.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Grants or removes staff access.
    async fn set_staff(
        &self,
        username: &str,
        is_staff: bool,
    ) -> Result<UserRecord, UsersServiceError>;
}
