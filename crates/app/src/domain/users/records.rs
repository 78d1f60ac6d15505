//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
///
/// The password hash never leaves the repository; this is the identity the
/// rest of the application sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub uuid: UserUuid,

    /// Unique, human-readable account name.
    pub username: String,

    /// Contact address; may be empty.
    pub email: String,

    /// Staff users may see every order.
    pub is_staff: bool,
    pub created_at: Timestamp,
}
