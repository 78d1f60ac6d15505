//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("username already exists")]
    UsernameTaken,

    #[error("user not found")]
    NotFound,

    #[error("username and password are required")]
    MissingRequiredData,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("failed to hash password: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::UsernameTaken,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => {
                Self::MissingRequiredData
            }
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
