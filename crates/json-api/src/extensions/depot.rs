//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use storefront_app::domain::users::records::UserRecord;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated account for downstream handlers.
    fn insert_identity(&mut self, user: UserRecord);

    /// The authenticated account, or 401 when the request carried none.
    fn identity_or_401(&self) -> Result<&UserRecord, StatusError>;

    /// The authenticated account if it is staff; 401 when anonymous, 403 otherwise.
    fn staff_or_403(&self) -> Result<&UserRecord, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_identity(&mut self, user: UserRecord) {
        self.inject(user);
    }

    fn identity_or_401(&self) -> Result<&UserRecord, StatusError> {
        self.obtain::<UserRecord>().map_err(|_ignored| {
            StatusError::unauthorized().brief("Authentication credentials were not provided.")
        })
    }

    fn staff_or_403(&self) -> Result<&UserRecord, StatusError> {
        let user = self.identity_or_401()?;

        if !user.is_staff {
            return Err(StatusError::forbidden()
                .brief("You do not have permission to perform this action."));
        }

        Ok(user)
    }
}
