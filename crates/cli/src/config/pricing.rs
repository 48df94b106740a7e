//! Pricing Config

use clap::Args;
use pizzeria::{
    prices::Price,
    pricing::{DEFAULT_DELIVERY_CHARGE, DEFAULT_TAX_PERCENT, PricingPolicy},
};
use rust_decimal::Decimal;
use rusty_money::iso;

use crate::commands::CliError;

/// Pricing rules.
#[derive(Debug, Args)]
pub struct PricingConfig {
    /// ISO 4217 currency code totals are shown in
    #[arg(long, env = "PIZZERIA_CURRENCY", default_value = "INR")]
    pub currency: String,

    /// Flat delivery charge per vendor order
    #[arg(
        long,
        env = "PIZZERIA_DELIVERY_CHARGE",
        default_value_t = Decimal::from(DEFAULT_DELIVERY_CHARGE)
    )]
    pub delivery_charge: Decimal,

    /// Tax rate in percent
    #[arg(long, env = "PIZZERIA_TAX_PERCENT", default_value_t = Decimal::from(DEFAULT_TAX_PERCENT))]
    pub tax_percent: Decimal,
}

impl PricingConfig {
    /// Build the pricing policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency code is unknown.
    pub fn policy(&self) -> Result<PricingPolicy, CliError> {
        let code = self.currency.to_ascii_uppercase();

        let currency =
            iso::find(&code).ok_or_else(|| CliError::UnknownCurrency(self.currency.clone()))?;

        Ok(PricingPolicy::new(
            currency,
            Price::new(self.delivery_charge),
            self.tax_percent,
        ))
    }
}
