//! Orders Data

use crate::domain::{orders::records::OrderUuid, products::records::ProductUuid};

/// An order request as submitted by a buyer.
#[derive(Clone)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub product: ProductUuid,

    /// Raw card number. Only its last four digits are ever persisted.
    pub card_number: String,
}

impl std::fmt::Debug for NewOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewOrder")
            .field("uuid", &self.uuid)
            .field("product", &self.product)
            .field("card_number", &"**redacted**")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_card_number() {
        let order = NewOrder {
            uuid: OrderUuid::new(),
            product: ProductUuid::new(),
            card_number: "4111111111111111".to_string(),
        };

        let debug = format!("{order:?}");

        assert!(!debug.contains("4111111111111111"), "{debug}");
        assert!(debug.contains("**redacted**"));
    }
}
