//! Checkout service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};
use stockroom::{
    amounts::{LineAmounts, TaxPolicy},
    cart::CartLine,
};
use tracing::{error, info, warn};

use crate::{
    database::Db,
    domain::{
        checkout::{
            SalesCart,
            errors::CheckoutError,
            receipt::{Receipt, ReceiptLine},
        },
        customers::{records::CustomerUuid, repository::PgCustomersRepository},
        products::{
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
        transactions::{
            data::NewTransaction, records::TransactionUuid, repository::PgTransactionsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    tax: TaxPolicy,
    products: PgProductsRepository,
    customers: PgCustomersRepository,
    transactions: PgTransactionsRepository,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db, tax: TaxPolicy) -> Self {
        Self {
            db,
            tax,
            products: PgProductsRepository::new(),
            customers: PgCustomersRepository::new(),
            transactions: PgTransactionsRepository::new(),
        }
    }

    async fn commit_sale(
        &self,
        cart: &SalesCart,
        customer: CustomerUuid,
    ) -> Result<Receipt, CheckoutError> {
        let mut tx = self.db.begin().await?;

        let customer = self
            .customers
            .find_customer(&mut tx, customer)
            .await?
            .ok_or(CheckoutError::UnknownCustomer(customer))?;

        let stock = self.lock_stock(&mut tx, cart).await?;

        let mut sales: Vec<(&str, NewTransaction)> = Vec::with_capacity(cart.line_count());

        for line in cart.lines() {
            let product = line.product();

            let record = stock
                .get(&product)
                .ok_or(CheckoutError::UnknownProduct(product))?;

            if record.quantity < line.quantity() {
                return Err(CheckoutError::InsufficientStock {
                    product,
                    available: record.quantity,
                    requested: line.quantity(),
                });
            }

            let amounts = LineAmounts::compute(
                line.unit_price(),
                record.cost_price,
                line.quantity(),
                &self.tax,
            )?;

            sales.push((
                line.product_name(),
                NewTransaction {
                    uuid: TransactionUuid::new(),
                    product,
                    customer: customer.uuid,
                    quantity: line.quantity(),
                    unit_price: line.unit_price(),
                    amounts,
                },
            ));
        }

        let mut lines = Vec::with_capacity(sales.len());

        for (product_name, sale) in sales {
            let (product, quantity) = (sale.product, sale.quantity);

            lines.push(ReceiptLine {
                product_name: product_name.to_string(),
                transaction: self.transactions.create_transaction(&mut tx, sale).await?,
            });

            let rows_affected = self
                .products
                .decrement_quantity(&mut tx, product, quantity)
                .await?;

            if rows_affected == 0 {
                return Err(CheckoutError::InsufficientStock {
                    product,
                    available: stock.get(&product).map_or(0, |record| record.quantity),
                    requested: quantity,
                });
            }
        }

        let receipt = Receipt::from_lines(customer, lines)?;

        tx.commit().await?;

        Ok(receipt)
    }

    /// Lock the cart's products for the rest of the transaction, keyed by uuid.
    async fn lock_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &SalesCart,
    ) -> Result<FxHashMap<ProductUuid, ProductRecord>, CheckoutError> {
        let products: Vec<ProductUuid> = cart.lines().iter().map(CartLine::product).collect();

        let locked = self.products.lock_products(tx, &products).await?;

        Ok(locked
            .into_iter()
            .map(|record| (record.uuid, record))
            .collect())
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    #[tracing::instrument(
        name = "checkout.service.checkout",
        skip(self, cart),
        fields(customer_uuid = %customer, lines = cart.line_count(), units = cart.total_units())
    )]
    async fn checkout(
        &self,
        cart: &mut SalesCart,
        customer: CustomerUuid,
    ) -> Result<Receipt, CheckoutError> {
        if cart.is_empty() {
            warn!("checkout rejected: cart is empty");

            return Err(CheckoutError::EmptyCart);
        }

        match self.commit_sale(cart, customer).await {
            Ok(receipt) => {
                cart.clear();

                info!(
                    total_with_tax = receipt.total_with_tax,
                    profit = receipt.profit_amount,
                    "checkout committed"
                );

                Ok(receipt)
            }
            Err(err) => {
                if err.is_rejection() {
                    warn!(error = %err, "checkout rejected");
                } else {
                    error!(error = %err, "checkout failed");
                }

                Err(err)
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Sell everything in `cart` to `customer` as one atomic unit.
    ///
    /// Every product in the cart is locked and its stock re-checked before anything is
    /// written. Each line then gets a ledger row and a matching stock decrement. Either all of
    /// those writes commit or none do.
    ///
    /// The cart is cleared only when the sale commits; on any error it is left as it was.
    async fn checkout(
        &self,
        cart: &mut SalesCart,
        customer: CustomerUuid,
    ) -> Result<Receipt, CheckoutError>;
}
