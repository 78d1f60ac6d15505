//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::records::ProductUuid;

/// Largest number of fraction digits a price may carry.
pub const PRICE_SCALE: u32 = 2;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

impl NewProduct {
    /// Whether the price is non-negative and fits the two-digit scale.
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        !self.price.is_sign_negative() && self.price.normalize().scale() <= PRICE_SCALE
    }
}
