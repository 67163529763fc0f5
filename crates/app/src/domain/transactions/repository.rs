//! Transactions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        customers::records::CustomerUuid,
        products::records::ProductUuid,
        transactions::{
            data::NewTransaction,
            records::{TransactionRecord, TransactionSummary, TransactionUuid},
        },
    },
};

const CREATE_TRANSACTION_SQL: &str = include_str!("sql/create_transaction.sql");
const LIST_TRANSACTIONS_SQL: &str = include_str!("sql/list_transactions.sql");
const COUNT_PRODUCT_TRANSACTIONS_SQL: &str = include_str!("sql/count_product_transactions.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTransactionsRepository;

impl PgTransactionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_transaction(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        transaction: NewTransaction,
    ) -> Result<TransactionRecord, sqlx::Error> {
        let amounts = transaction.amounts;

        query_as::<Postgres, TransactionRecord>(CREATE_TRANSACTION_SQL)
            .bind(transaction.uuid.into_uuid())
            .bind(transaction.product.into_uuid())
            .bind(transaction.customer.into_uuid())
            .bind(amount_to_i64(transaction.quantity, "quantity")?)
            .bind(amount_to_i64(transaction.unit_price, "unit_price")?)
            .bind(amount_to_i64(amounts.subtotal, "subtotal")?)
            .bind(amount_to_i64(amounts.tax_amount, "tax_amount")?)
            .bind(amount_to_i64(amounts.tax_inclusive_total, "total_with_tax")?)
            .bind(amounts.profit_amount)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_transactions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<TransactionSummary>, sqlx::Error> {
        query_as::<Postgres, TransactionSummary>(LIST_TRANSACTIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_for_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_PRODUCT_TRANSACTIONS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TransactionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: TransactionUuid::from_uuid(row.try_get("uuid")?),
            product: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            customer: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            quantity: try_get_amount(row, "quantity")?,
            unit_price: try_get_amount(row, "unit_price")?,
            subtotal: try_get_amount(row, "subtotal")?,
            tax_amount: try_get_amount(row, "tax_amount")?,
            total_with_tax: try_get_amount(row, "total_with_tax")?,
            profit_amount: row.try_get("profit_amount")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TransactionSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            transaction: TransactionRecord::from_row(row)?,
            product_name: row.try_get("product_name")?,
            customer_name: row.try_get("customer_name")?,
        })
    }
}
