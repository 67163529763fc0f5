//! Product Records

use jiff::Timestamp;
use stockroom::cart::NewCartLine;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,

    /// Units in stock.
    pub quantity: u64,

    /// Selling price in minor units.
    pub price: u64,

    /// Cost price in minor units.
    pub cost_price: u64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    /// Cart line capturing this product's current name and selling price.
    #[must_use]
    pub fn cart_line(&self, quantity: u64) -> NewCartLine<ProductUuid> {
        NewCartLine {
            product: self.uuid,
            product_name: self.name.clone(),
            unit_price: self.price,
            quantity,
        }
    }
}
