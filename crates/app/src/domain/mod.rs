//! Stockroom Domain Concerns

pub mod checkout;
pub mod customers;
pub mod products;
pub mod reports;
pub mod stock;
pub mod suppliers;
pub mod transactions;
