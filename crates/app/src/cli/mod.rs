use clap::{Parser, Subcommand};
use stockroom_app::{config::AppConfig, context::AppContext, observability};

mod checkout;
mod customers;
mod db;
mod output;
mod products;
mod reports;
mod stock;
mod suppliers;

#[derive(Debug, Parser)]
#[command(name = "stockroom-app", about = "Stockroom inventory CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the product catalog
    Product(products::ProductCommand),

    /// Manage customers
    Customer(customers::CustomerCommand),

    /// Manage suppliers
    Supplier(suppliers::SupplierCommand),

    /// Correct stock levels outside of a sale
    Stock(stock::StockCommand),

    /// Sell a cart of products to a customer
    Checkout(checkout::CheckoutArgs),

    /// Dashboard figures and sales history
    Report(reports::ReportCommand),

    /// Database administration
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let currency = self.config.sales.currency;

        match self.command {
            Commands::Product(command) => {
                products::run(command, &connect(&self.config).await?, currency).await
            }
            Commands::Customer(command) => {
                customers::run(command, &connect(&self.config).await?).await
            }
            Commands::Supplier(command) => {
                suppliers::run(command, &connect(&self.config).await?).await
            }
            Commands::Stock(command) => stock::run(command, &connect(&self.config).await?).await,
            Commands::Checkout(args) => {
                checkout::run(args, &connect(&self.config).await?, currency).await
            }
            Commands::Report(command) => {
                reports::run(command, &connect(&self.config).await?, currency).await
            }
            Commands::Db(command) => db::run(command, &self.config.database).await,
        }
    }
}

async fn connect(config: &AppConfig) -> Result<AppContext, String> {
    AppContext::from_database_url(&config.database.database_url, config.sales.tax_policy())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
