use clap::{Args, Subcommand};
use stockroom::{
    amounts::{markup_percent, sells_at_a_loss},
    stock::StockStatus,
};
use stockroom_app::{
    config::sales::DisplayCurrency,
    context::AppContext,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        records::{ProductRecord, ProductUuid},
    },
};

use super::output;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product with its opening stock
    Add(AddProductArgs),

    /// List live products
    List(ListProductsArgs),

    /// Show a single product
    Show(ProductArg),

    /// Change a product's name and prices
    Update(UpdateProductArgs),

    /// Remove a product from the catalog, keeping its sales history
    Delete(ProductArg),
}

#[derive(Debug, Args)]
struct AddProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Opening stock
    #[arg(long, default_value_t = 0)]
    quantity: u64,

    /// Selling price in minor units
    #[arg(long)]
    price: u64,

    /// Cost price in minor units, greater than zero
    #[arg(long)]
    cost_price: u64,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    uuid: Option<ProductUuid>,
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Only list products with stock on hand
    #[arg(long)]
    in_stock: bool,
}

#[derive(Debug, Args)]
struct ProductArg {
    /// Product UUID
    uuid: ProductUuid,
}

#[derive(Debug, Args)]
struct UpdateProductArgs {
    /// Product UUID
    uuid: ProductUuid,

    /// New product name
    #[arg(long)]
    name: String,

    /// New selling price in minor units
    #[arg(long)]
    price: u64,

    /// New cost price in minor units, greater than zero
    #[arg(long)]
    cost_price: u64,
}

pub(crate) async fn run(
    command: ProductCommand,
    ctx: &AppContext,
    currency: DisplayCurrency,
) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Add(args) => {
            let product = ctx
                .products
                .create_product(NewProduct {
                    uuid: args.uuid.unwrap_or_default(),
                    name: args.name,
                    quantity: args.quantity,
                    price: args.price,
                    cost_price: args.cost_price,
                })
                .await
                .map_err(|error| format!("failed to create product: {error}"))?;

            warn_on_loss(&product);
            print_product(&product, currency);
        }
        ProductSubcommand::List(args) => {
            let products = if args.in_stock {
                ctx.products.list_in_stock_products().await
            } else {
                ctx.products.list_products().await
            }
            .map_err(|error| format!("failed to list products: {error}"))?;

            if products.is_empty() {
                println!("no products found");
            }

            for product in products {
                print_product(&product, currency);
                println!();
            }
        }
        ProductSubcommand::Show(args) => {
            let product = ctx
                .products
                .get_product(args.uuid)
                .await
                .map_err(|error| format!("failed to get product: {error}"))?;

            print_product(&product, currency);
        }
        ProductSubcommand::Update(args) => {
            let product = ctx
                .products
                .update_product(
                    args.uuid,
                    ProductUpdate {
                        name: args.name,
                        price: args.price,
                        cost_price: args.cost_price,
                    },
                )
                .await
                .map_err(|error| format!("failed to update product: {error}"))?;

            warn_on_loss(&product);
            print_product(&product, currency);
        }
        ProductSubcommand::Delete(args) => {
            let sales = ctx
                .transactions
                .count_for_product(args.uuid)
                .await
                .map_err(|error| format!("failed to count product sales: {error}"))?;

            ctx.products
                .delete_product(args.uuid)
                .await
                .map_err(|error| format!("failed to delete product: {error}"))?;

            println!("product {} deleted", args.uuid);

            if sales > 0 {
                println!("{sales} recorded sales of this product are kept in the history");
            }
        }
    }

    Ok(())
}

fn print_product(product: &ProductRecord, currency: DisplayCurrency) {
    println!("product_uuid: {}", product.uuid);
    println!("name: {}", product.name);
    println!("quantity: {}", product.quantity);
    println!("stock_status: {}", StockStatus::of(product.quantity));
    println!("price: {}", output::amount(product.price, currency));
    println!("cost_price: {}", output::amount(product.cost_price, currency));
    println!(
        "markup: {}",
        markup_percent(product.price, product.cost_price)
            .map_or_else(|| "n/a".to_string(), |markup| format!("{markup}%"))
    );
}

fn warn_on_loss(product: &ProductRecord) {
    if let Some(warning) = loss_warning(product) {
        eprintln!("{warning}");
    }
}

fn loss_warning(product: &ProductRecord) -> Option<String> {
    sells_at_a_loss(product.price, product.cost_price).then(|| {
        format!(
            "warning: {} sells at {} but costs {}; every sale makes a loss or breaks even",
            product.name, product.price, product.cost_price
        )
    })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn product(price: u64, cost_price: u64) -> ProductRecord {
        ProductRecord {
            uuid: ProductUuid::new(),
            name: "Stapler".to_string(),
            quantity: 4,
            price,
            cost_price,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn pricing_at_cost_is_warned_about() {
        let warning = loss_warning(&product(300, 300));

        assert!(
            warning
                .as_deref()
                .is_some_and(|warning| warning.contains("Stapler sells at 300 but costs 300")),
            "expected a loss warning, got {warning:?}"
        );
        assert!(loss_warning(&product(250, 300)).is_some());
    }

    #[test]
    fn pricing_above_cost_is_quiet() {
        assert_eq!(loss_warning(&product(450, 300)), None);
    }
}
