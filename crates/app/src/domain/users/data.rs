//! User Data

use std::fmt;

use crate::domain::users::records::UserUuid;

/// New User Data
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("uuid", &self.uuid)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Username and password presented at login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}
