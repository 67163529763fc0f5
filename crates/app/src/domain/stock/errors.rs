//! Stock service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::products::records::ProductUuid;

#[derive(Debug, Error)]
pub enum StockServiceError {
    #[error("adjustment neither adds nor removes stock")]
    NothingToAdjust,

    #[error("product not found")]
    NotFound,

    #[error(
        "insufficient stock for product {product}: {available} available, {requested} requested"
    )]
    InsufficientStock {
        product: ProductUuid,
        available: u64,
        requested: u64,
    },

    #[error("adjusted stock for product {product} is too large")]
    QuantityOverflow { product: ProductUuid },

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for StockServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
