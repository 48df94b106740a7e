//! Fixtures Config

use std::path::PathBuf;

use clap::Args;
use pizzeria::fixtures::{CatalogFixture, DEFAULT_BASE_PATH, FixtureError};

/// Catalog fixture settings.
#[derive(Debug, Args)]
pub struct FixturesConfig {
    /// Directory holding `catalog/<name>.yml` fixture sets
    #[arg(long, env = "PIZZERIA_FIXTURES_DIR", default_value = DEFAULT_BASE_PATH)]
    pub fixtures_dir: PathBuf,

    /// Catalog fixture set to resolve products and toppings from
    #[arg(long, env = "PIZZERIA_CATALOG", default_value = "storefront")]
    pub catalog: String,
}

impl FixturesConfig {
    /// Load the configured catalog set.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be read or parsed.
    pub fn load(&self) -> Result<CatalogFixture, FixtureError> {
        CatalogFixture::load(&self.fixtures_dir, &self.catalog)
    }
}
