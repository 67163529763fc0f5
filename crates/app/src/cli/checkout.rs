use std::str::FromStr;

use clap::Args;
use stockroom_app::{
    config::sales::DisplayCurrency,
    context::AppContext,
    domain::{
        checkout::{Receipt, SalesCart},
        customers::records::CustomerUuid,
        products::{ProductsService, records::ProductUuid},
    },
};

use super::output;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Customer UUID
    #[arg(long)]
    customer: CustomerUuid,

    /// Line item as <product-uuid>=<quantity>; repeat for more lines
    #[arg(long = "item", required = true)]
    items: Vec<ItemArg>,
}

/// One `<product-uuid>=<quantity>` pair from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemArg {
    product: ProductUuid,
    quantity: u64,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (product, quantity) = value
            .split_once('=')
            .ok_or_else(|| format!("expected <product-uuid>=<quantity>, got '{value}'"))?;

        Ok(Self {
            product: product
                .trim()
                .parse()
                .map_err(|error| format!("invalid product uuid '{product}': {error}"))?,
            quantity: quantity
                .trim()
                .parse()
                .map_err(|error| format!("invalid quantity '{quantity}': {error}"))?,
        })
    }
}

pub(crate) async fn run(
    args: CheckoutArgs,
    ctx: &AppContext,
    currency: DisplayCurrency,
) -> Result<(), String> {
    let mut cart = build_cart(ctx.products.as_ref(), &args.items).await?;

    let receipt = ctx
        .checkout
        .checkout(&mut cart, args.customer)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    print_receipt(&receipt, currency);

    Ok(())
}

/// Fill a cart from the command line items, checking each against the stock currently on hand.
async fn build_cart(
    products: &dyn ProductsService,
    items: &[ItemArg],
) -> Result<SalesCart, String> {
    let mut cart = SalesCart::new();

    for item in items {
        let product = products
            .get_product(item.product)
            .await
            .map_err(|error| format!("product {}: {error}", item.product))?;

        cart.add_line(product.cart_line(item.quantity), product.quantity)
            .map_err(|error| {
                format!("cannot add {} x {}: {error}", item.quantity, product.name)
            })?;
    }

    Ok(cart)
}

fn print_receipt(receipt: &Receipt, currency: DisplayCurrency) {
    println!("customer: {}", receipt.customer.name);

    for line in &receipt.lines {
        let row = &line.transaction;

        println!(
            "  {} x {} @ {} = {}",
            row.quantity,
            line.product_name,
            output::amount(row.unit_price, currency),
            output::amount(row.subtotal, currency)
        );
    }

    println!("lines: {}", receipt.line_count);
    println!("units: {}", receipt.total_units);
    println!("subtotal: {}", output::amount(receipt.subtotal, currency));
    println!("tax: {}", output::amount(receipt.tax_amount, currency));
    println!("total: {}", output::amount(receipt.total_with_tax, currency));
    println!("profit: {}", output::signed_amount(receipt.profit_amount, currency));
}
