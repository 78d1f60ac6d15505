//! Staff-only endpoints.

pub(crate) mod orders;
