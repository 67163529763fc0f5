//! Application configuration, read from CLI arguments and the environment.

use clap::Args;

use crate::config::{db::DatabaseConfig, logging::LoggingConfig, sales::SalesConfig};

pub mod db;
pub mod logging;
pub mod sales;

/// Settings shared by every command.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Tax and currency settings.
    #[command(flatten)]
    pub sales: SalesConfig,
}
