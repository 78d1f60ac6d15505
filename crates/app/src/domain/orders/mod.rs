//! Orders

pub mod card;
pub mod data;
pub mod details;
pub mod errors;
pub mod payments;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
