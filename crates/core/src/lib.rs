//! Stockroom
//!
//! Storage-free inventory domain logic: the shopping cart a sale is assembled in, and the
//! per-line arithmetic (subtotal, tax, profit) recorded when that sale is committed.

pub mod amounts;
pub mod cart;
pub mod prelude;
pub mod stock;
