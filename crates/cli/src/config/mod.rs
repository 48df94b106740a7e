//! CLI configuration

use clap::Parser;

use crate::{
    commands::Commands,
    config::{
        fixtures::FixturesConfig, logging::LoggingConfig, pricing::PricingConfig,
        storage::StorageConfig,
    },
};

pub(crate) mod fixtures;
pub(crate) mod logging;
pub(crate) mod pricing;
pub(crate) mod storage;

/// Pizzeria storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "pizzeria", about = "Pizzeria storefront cart", long_about = None)]
pub struct Config {
    /// Cart snapshot storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Catalog fixture settings.
    #[command(flatten)]
    pub fixtures: FixturesConfig,

    /// Pricing rules.
    #[command(flatten)]
    pub pricing: PricingConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Commands,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
