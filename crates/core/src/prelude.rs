//! Prelude

pub use crate::{
    amounts::{AmountError, LineAmounts, TaxPolicy, markup_percent, sells_at_a_loss},
    cart::{Cart, CartError, CartLine, NewCartLine},
    stock::StockStatus,
};
