//! Transactions
//!
//! The append-only sales ledger. Rows are only ever written by checkout.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::TransactionsServiceError;
pub use service::*;
