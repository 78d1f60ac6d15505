//! Authentication: token middleware and account endpoints.

mod errors;
pub(crate) mod login;
pub(crate) mod me;
pub(crate) mod middleware;
pub(crate) mod register;
mod responses;

pub(crate) use errors::*;
pub(crate) use responses::*;
