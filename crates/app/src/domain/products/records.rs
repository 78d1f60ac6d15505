//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,

    /// Unit price with two fraction digits.
    pub price: Decimal,

    /// Image reference (path or URL) shown next to the product.
    pub image_url: String,
    pub created_at: Timestamp,
}
