//! App Context

use std::sync::Arc;

use stockroom::amounts::TaxPolicy;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        checkout::{CheckoutService, PgCheckoutService},
        customers::{CustomersService, PgCustomersService},
        products::{PgProductsService, ProductsService},
        reports::{PgReportsService, ReportsService},
        stock::{PgStockService, StockService},
        suppliers::{PgSuppliersService, SuppliersService},
        transactions::{PgTransactionsService, TransactionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub customers: Arc<dyn CustomersService>,
    pub suppliers: Arc<dyn SuppliersService>,
    pub stock: Arc<dyn StockService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub transactions: Arc<dyn TransactionsService>,
    pub reports: Arc<dyn ReportsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, tax: TaxPolicy) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::new(Db::new(pool), tax))
    }

    #[must_use]
    pub fn new(db: Db, tax: TaxPolicy) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            suppliers: Arc::new(PgSuppliersService::new(db.clone())),
            stock: Arc::new(PgStockService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(db.clone(), tax)),
            transactions: Arc::new(PgTransactionsService::new(db.clone())),
            reports: Arc::new(PgReportsService::new(db)),
        }
    }
}
