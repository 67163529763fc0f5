//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub quantity: u64,
    pub price: u64,
    pub cost_price: u64,
}

/// Product Update Data
///
/// Stock levels are not part of an update; they only move through checkout and stock
/// adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: u64,
    pub cost_price: u64,
}
