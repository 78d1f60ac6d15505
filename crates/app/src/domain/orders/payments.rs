//! Simulated payment authorization.

use crate::domain::orders::{card::CardNumber, records::OrderStatus};

/// Cards beginning with this prefix are always declined.
pub const DECLINED_CARD_PREFIX: &str = "0000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved,
    Declined,
}

impl PaymentOutcome {
    /// Status recorded on the order for this outcome.
    #[must_use]
    pub const fn order_status(self) -> OrderStatus {
        match self {
            Self::Approved => OrderStatus::Paid,
            Self::Declined => OrderStatus::Failed,
        }
    }
}

#[must_use]
pub fn authorize(card: &CardNumber) -> PaymentOutcome {
    if card.starts_with(DECLINED_CARD_PREFIX) {
        PaymentOutcome::Declined
    } else {
        PaymentOutcome::Approved
    }
}
