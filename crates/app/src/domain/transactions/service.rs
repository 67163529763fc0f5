//! Transactions service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::records::ProductUuid,
        transactions::{
            errors::TransactionsServiceError, records::TransactionSummary,
            repository::PgTransactionsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgTransactionsService {
    db: Db,
    repository: PgTransactionsRepository,
}

impl PgTransactionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTransactionsRepository::new(),
        }
    }
}

#[async_trait]
impl TransactionsService for PgTransactionsService {
    async fn list_transactions(&self) -> Result<Vec<TransactionSummary>, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let transactions = self.repository.list_transactions(&mut tx).await?;

        tx.commit().await?;

        Ok(transactions)
    }

    async fn count_for_product(
        &self,
        product: ProductUuid,
    ) -> Result<u64, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_for_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait TransactionsService: Send + Sync {
    /// Retrieves the whole ledger with product and customer names, newest first.
    async fn list_transactions(&self) -> Result<Vec<TransactionSummary>, TransactionsServiceError>;

    /// Number of ledger rows recorded against a product, deleted or not.
    async fn count_for_product(
        &self,
        product: ProductUuid,
    ) -> Result<u64, TransactionsServiceError>;
}
