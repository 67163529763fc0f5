//! Test Helpers

use sqlx::query;
use stockroom::cart::CartError;
use testresult::TestResult;

use crate::{
    domain::{
        checkout::{CheckoutService, Receipt, SalesCart},
        customers::{
            CustomersService, CustomersServiceError,
            data::NewCustomer,
            records::{CustomerRecord, CustomerUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    quantity: u64,
    price: u64,
    cost_price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            quantity,
            price,
            cost_price,
        })
        .await
}

pub(crate) async fn create_customer(
    ctx: &TestContext,
    name: &str,
) -> Result<CustomerRecord, CustomersServiceError> {
    ctx.customers
        .create_customer(NewCustomer {
            uuid: CustomerUuid::new(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
}

/// Cart holding `quantity` of each product, checked against the product's stock as fetched.
pub(crate) fn cart_of(lines: &[(&ProductRecord, u64)]) -> Result<SalesCart, CartError> {
    let mut cart = SalesCart::new();

    for (product, quantity) in lines {
        cart.add_line(product.cart_line(*quantity), product.quantity)?;
    }

    Ok(cart)
}

pub(crate) async fn sell(
    ctx: &TestContext,
    customer: CustomerUuid,
    lines: &[(&ProductRecord, u64)],
) -> TestResult<Receipt> {
    let mut cart = cart_of(lines)?;

    Ok(ctx.checkout.checkout(&mut cart, customer).await?)
}

/// Make every ledger insert for `product` fail, so a checkout breaks partway through its writes.
pub(crate) async fn reject_transactions_for(
    ctx: &TestContext,
    product: ProductUuid,
) -> Result<(), sqlx::Error> {
    query(
        "CREATE OR REPLACE FUNCTION reject_transaction() RETURNS trigger AS $$
         BEGIN
             RAISE EXCEPTION 'sale of product % rejected', NEW.product_uuid;
         END;
         $$ LANGUAGE plpgsql",
    )
    .execute(ctx.db.pool())
    .await?;

    query(&format!(
        "CREATE TRIGGER reject_transactions_{} BEFORE INSERT ON transactions
         FOR EACH ROW WHEN (NEW.product_uuid = '{product}')
         EXECUTE PROCEDURE reject_transaction()",
        product.into_uuid().simple()
    ))
    .execute(ctx.db.pool())
    .await?;

    Ok(())
}
