//! Transaction Records

use jiff::Timestamp;

use crate::{
    domain::{customers::records::CustomerUuid, products::records::ProductUuid},
    uuids::TypedUuid,
};

/// Transaction UUID
pub type TransactionUuid = TypedUuid<TransactionRecord>;

/// Transaction Record
///
/// Prices are copied at the time of sale, so later catalog edits never change history.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub uuid: TransactionUuid,
    pub product: ProductUuid,
    pub customer: CustomerUuid,
    pub quantity: u64,
    pub unit_price: u64,
    pub subtotal: u64,
    pub tax_amount: u64,
    pub total_with_tax: u64,
    pub profit_amount: i64,
    pub created_at: Timestamp,
}

/// A ledger row together with the names it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    pub transaction: TransactionRecord,
    pub product_name: String,
    pub customer_name: String,
}
