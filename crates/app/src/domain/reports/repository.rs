//! Reports Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{database::try_get_amount, domain::reports::records::InventoryStats};

const INVENTORY_STATS_SQL: &str = include_str!("sql/inventory_stats.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn inventory_stats(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<InventoryStats, sqlx::Error> {
        query_as::<Postgres, InventoryStats>(INVENTORY_STATS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for InventoryStats {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            products: try_get_amount(row, "products")?,
            customers: try_get_amount(row, "customers")?,
            suppliers: try_get_amount(row, "suppliers")?,
            transactions: try_get_amount(row, "transactions")?,
            units_in_stock: try_get_amount(row, "units_in_stock")?,
            total_revenue: try_get_amount(row, "total_revenue")?,
            total_profit: row.try_get("total_profit")?,
        })
    }
}
