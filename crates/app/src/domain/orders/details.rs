//! Orders joined with the records they reference.

use crate::domain::{
    orders::records::OrderRecord, products::records::ProductRecord, users::records::UserRecord,
};

/// An order with its product resolved at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub order: OrderRecord,
    pub product: ProductRecord,
}

/// An order with its product and owning account, for staff views.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminOrderDetails {
    pub order: OrderRecord,
    pub product: ProductRecord,
    pub owner: UserRecord,
}

/// Result of placing an order. Both variants have persisted an order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacedOrder {
    Paid(OrderDetails),
    Declined(OrderDetails),
}

impl PlacedOrder {
    #[must_use]
    pub fn details(&self) -> &OrderDetails {
        match self {
            Self::Paid(details) | Self::Declined(details) => details,
        }
    }

    #[must_use]
    pub fn into_details(self) -> OrderDetails {
        match self {
            Self::Paid(details) | Self::Declined(details) => details,
        }
    }
}
