use clap::{Args, Subcommand};
use stockroom_app::{config::sales::DisplayCurrency, context::AppContext};

use super::output;

#[derive(Debug, Args)]
pub(crate) struct ReportCommand {
    #[command(subcommand)]
    command: ReportSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReportSubcommand {
    /// Catalog counts with revenue and profit totals
    Stats,

    /// Sales history, newest first
    Transactions,
}

pub(crate) async fn run(
    command: ReportCommand,
    ctx: &AppContext,
    currency: DisplayCurrency,
) -> Result<(), String> {
    match command.command {
        ReportSubcommand::Stats => {
            let stats = ctx
                .reports
                .stats()
                .await
                .map_err(|error| format!("failed to load statistics: {error}"))?;

            println!("products: {}", stats.products);
            println!("customers: {}", stats.customers);
            println!("suppliers: {}", stats.suppliers);
            println!("transactions: {}", stats.transactions);
            println!("units_in_stock: {}", stats.units_in_stock);
            println!("total_revenue: {}", output::amount(stats.total_revenue, currency));
            println!(
                "total_profit: {}",
                output::signed_amount(stats.total_profit, currency)
            );
        }
        ReportSubcommand::Transactions => {
            let transactions = ctx
                .transactions
                .list_transactions()
                .await
                .map_err(|error| format!("failed to list transactions: {error}"))?;

            if transactions.is_empty() {
                println!("no transactions recorded");
            }

            for summary in transactions {
                let row = &summary.transaction;

                println!("transaction_uuid: {}", row.uuid);
                println!("sold_at: {}", row.created_at);
                println!("product: {}", summary.product_name);
                println!("customer: {}", summary.customer_name);
                println!("quantity: {}", row.quantity);
                println!("unit_price: {}", output::amount(row.unit_price, currency));
                println!("total_with_tax: {}", output::amount(row.total_with_tax, currency));
                println!("profit: {}", output::signed_amount(row.profit_amount, currency));
                println!();
            }
        }
    }

    Ok(())
}
