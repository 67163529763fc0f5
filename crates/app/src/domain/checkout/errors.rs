//! Checkout errors.

use stockroom::amounts::AmountError;
use thiserror::Error;

use crate::domain::{customers::records::CustomerUuid, products::records::ProductUuid};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("customer {0} not found")]
    UnknownCustomer(CustomerUuid),

    #[error("product {0} not found")]
    UnknownProduct(ProductUuid),

    #[error(
        "insufficient stock for product {product}: {available} available, {requested} requested"
    )]
    InsufficientStock {
        product: ProductUuid,
        available: u64,
        requested: u64,
    },

    #[error("sale amount out of range")]
    Amount(#[from] AmountError),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

impl CheckoutError {
    /// Whether the checkout was refused because of the cart or catalog state, rather than
    /// failing.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Sql(_))
    }
}
