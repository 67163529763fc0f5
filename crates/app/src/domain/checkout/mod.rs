//! Checkout
//!
//! Turns a cart into ledger rows and stock decrements inside a single database transaction.

use stockroom::cart::Cart;

use crate::domain::products::records::ProductUuid;

pub mod errors;
pub mod receipt;
pub mod service;

pub use errors::CheckoutError;
pub use receipt::{Receipt, ReceiptLine};
pub use service::*;

/// A cart of catalog products.
pub type SalesCart = Cart<ProductUuid>;
