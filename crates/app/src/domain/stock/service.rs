//! Stock service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        products::{
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
        stock::{data::StockAdjustment, errors::StockServiceError},
    },
};

#[derive(Debug, Clone)]
pub struct PgStockService {
    db: Db,
    products: PgProductsRepository,
}

impl PgStockService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl StockService for PgStockService {
    #[tracing::instrument(
        name = "stock.service.adjust_stock",
        skip(self),
        fields(product_uuid = %product, add = adjustment.add, remove = adjustment.remove),
        err
    )]
    async fn adjust_stock(
        &self,
        product: ProductUuid,
        adjustment: StockAdjustment,
    ) -> Result<ProductRecord, StockServiceError> {
        if adjustment.is_empty() {
            return Err(StockServiceError::NothingToAdjust);
        }

        let mut tx = self.db.begin().await?;

        let current = self.products.lock_product(&mut tx, product).await?;

        let available = current
            .quantity
            .checked_add(adjustment.add)
            .filter(|quantity| i64::try_from(*quantity).is_ok())
            .ok_or(StockServiceError::QuantityOverflow { product })?;

        let quantity = adjustment
            .apply(current.quantity)
            .ok_or(StockServiceError::InsufficientStock {
                product,
                available,
                requested: adjustment.remove,
            })?;

        let updated = self.products.set_quantity(&mut tx, product, quantity).await?;

        tx.commit().await?;

        info!(
            from = current.quantity,
            to = updated.quantity,
            "stock adjusted"
        );

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait StockService: Send + Sync {
    /// Adds and removes units of a product's stock in a single step.
    ///
    /// The product row is locked for the duration, so concurrent sales and adjustments see each
    /// other's results. Stock can never be taken below zero.
    async fn adjust_stock(
        &self,
        product: ProductUuid,
        adjustment: StockAdjustment,
    ) -> Result<ProductRecord, StockServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::ProductsService,
        test::{TestContext, helpers::create_product},
    };

    use super::*;

    #[tokio::test]
    async fn adding_stock_increases_quantity() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", 10, 25, 10).await?;

        let updated = ctx
            .stock
            .adjust_stock(product.uuid, StockAdjustment::add(5))
            .await?;

        assert_eq!(updated.quantity, 15);

        Ok(())
    }

    #[tokio::test]
    async fn add_and_remove_are_applied_together() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", 10, 25, 10).await?;

        let updated = ctx
            .stock
            .adjust_stock(product.uuid, StockAdjustment { add: 4, remove: 14 })
            .await?;

        assert_eq!(updated.quantity, 0);

        Ok(())
    }

    #[tokio::test]
    async fn removing_more_than_stock_is_rejected_and_stock_is_kept() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", 10, 25, 10).await?;

        let result = ctx
            .stock
            .adjust_stock(product.uuid, StockAdjustment::remove(15))
            .await;

        assert!(
            matches!(
                result,
                Err(StockServiceError::InsufficientStock {
                    available: 10,
                    requested: 15,
                    ..
                })
            ),
            "expected InsufficientStock, got {result:?}"
        );

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!(product.quantity, 10);

        Ok(())
    }

    #[tokio::test]
    async fn empty_adjustment_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", 10, 25, 10).await?;

        let result = ctx
            .stock
            .adjust_stock(product.uuid, StockAdjustment::default())
            .await;

        assert!(
            matches!(result, Err(StockServiceError::NothingToAdjust)),
            "expected NothingToAdjust, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .stock
            .adjust_stock(ProductUuid::new(), StockAdjustment::add(1))
            .await;

        assert!(
            matches!(result, Err(StockServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn overflowing_addition_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", 10, 25, 10).await?;

        let result = ctx
            .stock
            .adjust_stock(product.uuid, StockAdjustment::add(u64::MAX))
            .await;

        assert!(
            matches!(result, Err(StockServiceError::QuantityOverflow { .. })),
            "expected QuantityOverflow, got {result:?}"
        );

        Ok(())
    }
}
