//! Test context for service-level integration tests.

use decimal_percentage::Percentage;
use stockroom::amounts::TaxPolicy;

use crate::{
    database::Db,
    domain::{
        checkout::PgCheckoutService, customers::PgCustomersService,
        products::PgProductsService, reports::PgReportsService, stock::PgStockService,
        suppliers::PgSuppliersService, transactions::PgTransactionsService,
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) products: PgProductsService,
    pub(crate) customers: PgCustomersService,
    pub(crate) suppliers: PgSuppliersService,
    pub(crate) stock: PgStockService,
    pub(crate) checkout: PgCheckoutService,
    pub(crate) transactions: PgTransactionsService,
    pub(crate) reports: PgReportsService,
}

impl TestContext {
    /// Services over a fresh database. Checkout charges no tax.
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            customers: PgCustomersService::new(db.clone()),
            suppliers: PgSuppliersService::new(db.clone()),
            stock: PgStockService::new(db.clone()),
            checkout: PgCheckoutService::new(db.clone(), TaxPolicy::exempt()),
            transactions: PgTransactionsService::new(db.clone()),
            reports: PgReportsService::new(db),
            db: test_db,
        }
    }

    /// A checkout service over the same database charging `rate` tax.
    pub(crate) fn checkout_with_tax(&self, rate: f64) -> PgCheckoutService {
        PgCheckoutService::new(
            Db::new(self.db.pool().clone()),
            TaxPolicy::new(Percentage::from(rate)),
        )
    }
}
