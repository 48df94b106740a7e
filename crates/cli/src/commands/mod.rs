//! Subcommands

use std::io;

use clap::Subcommand;
use pizzeria::{
    cart::CartStore, fixtures::FixtureError, orders::CheckoutError, prices::PriceError,
    session::TokenError, snapshot::FileSnapshotStore,
};
use thiserror::Error;

use crate::config::Config;

mod cart;
mod order;
mod token;

/// Errors surfaced to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog fixture could not be loaded or resolved.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Checkout details were incomplete.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// A price could not be shown in the configured currency.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// A token could not be decoded.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A JSON document could not be read or written.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output or reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured currency code is not an ISO 4217 code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// No tenant group for the requested tenant.
    #[error("nothing in the cart for tenant {0}")]
    TenantNotInCart(String),
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect and change the cart.
    Cart(cart::CartCommand),

    /// Build checkout payloads and track placed orders.
    Order(order::OrderCommand),

    /// Inspect access tokens.
    Token(token::TokenCommand),
}

/// Run the configured subcommand, writing its output to `out`.
pub(crate) fn run(config: &Config, out: &mut impl io::Write) -> Result<(), CliError> {
    match &config.command {
        Commands::Cart(command) => cart::run(config, command, out),
        Commands::Order(command) => order::run(config, command, out),
        Commands::Token(command) => token::run(command, out),
    }
}

/// Open the cart in the configured data directory and restore it.
fn open_cart(config: &Config) -> CartStore<FileSnapshotStore> {
    let mut cart = CartStore::new(config.storage.snapshot_store());

    cart.restore_from_snapshot();

    cart
}
