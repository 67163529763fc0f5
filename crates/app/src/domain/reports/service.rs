//! Reports service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::reports::{
        errors::ReportsServiceError, records::InventoryStats, repository::PgReportsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn stats(&self) -> Result<InventoryStats, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let stats = self.repository.inventory_stats(&mut tx).await?;

        tx.commit().await?;

        Ok(stats)
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Catalog counts plus revenue and profit totals from the ledger.
    async fn stats(&self) -> Result<InventoryStats, ReportsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            products::ProductsService,
            suppliers::{SuppliersService, data::NewSupplier, records::SupplierUuid},
        },
        test::{
            TestContext,
            helpers::{create_customer, create_product, sell},
        },
    };

    use super::*;

    #[tokio::test]
    async fn empty_database_reports_zeroes() -> TestResult {
        let ctx = TestContext::new().await;

        let stats = ctx.reports.stats().await?;

        assert_eq!(stats, InventoryStats::default());

        Ok(())
    }

    #[tokio::test]
    async fn stats_come_from_catalog_and_ledger() -> TestResult {
        let ctx = TestContext::new().await;
        let a = create_product(&ctx, "A", 10, 50, 30).await?;
        let b = create_product(&ctx, "B", 10, 20, 25).await?;
        let gone = create_product(&ctx, "Gone", 4, 10, 5).await?;
        let customer = create_customer(&ctx, "Asha").await?;

        ctx.suppliers
            .create_supplier(NewSupplier {
                uuid: SupplierUuid::new(),
                name: "Paper Mills".to_string(),
                contact: "orders@papermills.example".to_string(),
            })
            .await?;

        ctx.products.delete_product(gone.uuid).await?;

        sell(&ctx, customer.uuid, &[(&a, 2), (&b, 5)]).await?;

        let stats = ctx.reports.stats().await?;

        assert_eq!(stats.products, 2);
        assert_eq!(stats.customers, 1);
        assert_eq!(stats.suppliers, 1);
        assert_eq!(stats.transactions, 2);
        assert_eq!(stats.units_in_stock, 8 + 5);
        assert_eq!(stats.total_revenue, 200);

        // A earns 40, B sells below cost and loses 25
        assert_eq!(stats.total_profit, 15);

        Ok(())
    }
}
