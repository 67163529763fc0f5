//! Stock
//!
//! Administrative stock corrections, outside of sales.

pub mod data;
pub mod errors;
pub mod service;

pub use errors::StockServiceError;
pub use service::*;
