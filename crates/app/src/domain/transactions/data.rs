//! Transactions Data

use stockroom::amounts::LineAmounts;

use crate::domain::{
    customers::records::CustomerUuid, products::records::ProductUuid,
    transactions::records::TransactionUuid,
};

/// New Transaction Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub uuid: TransactionUuid,
    pub product: ProductUuid,
    pub customer: CustomerUuid,
    pub quantity: u64,
    pub unit_price: u64,
    pub amounts: LineAmounts,
}
