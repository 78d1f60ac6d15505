//! Orders

mod errors;
mod handlers;
pub(crate) mod projections;

pub(crate) use handlers::*;
