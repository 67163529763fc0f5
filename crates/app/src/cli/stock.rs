use clap::{Args, Subcommand};
use stockroom_app::{
    context::AppContext,
    domain::{products::records::ProductUuid, stock::data::StockAdjustment},
};

#[derive(Debug, Args)]
pub(crate) struct StockCommand {
    #[command(subcommand)]
    command: StockSubcommand,
}

#[derive(Debug, Subcommand)]
enum StockSubcommand {
    /// Add and/or remove units of a product
    Adjust(AdjustStockArgs),
}

#[derive(Debug, Args)]
struct AdjustStockArgs {
    /// Product UUID
    product: ProductUuid,

    /// Units to add
    #[arg(long, default_value_t = 0)]
    add: u64,

    /// Units to remove
    #[arg(long, default_value_t = 0)]
    remove: u64,
}

pub(crate) async fn run(command: StockCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        StockSubcommand::Adjust(args) => {
            let product = ctx
                .stock
                .adjust_stock(
                    args.product,
                    StockAdjustment {
                        add: args.add,
                        remove: args.remove,
                    },
                )
                .await
                .map_err(|error| format!("failed to adjust stock: {error}"))?;

            println!("product_uuid: {}", product.uuid);
            println!("name: {}", product.name);
            println!("quantity: {}", product.quantity);
        }
    }

    Ok(())
}
