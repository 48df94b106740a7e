//! Pricing
//!
//! Cart totals per vendor: items subtotal, a flat delivery charge for any
//! non-empty basket, tax on the subtotal rounded to whole currency units, and
//! the grand total after discount.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};

use crate::{
    items::groups::CartGroup,
    prices::{Price, PriceError},
    tenants::TenantDirectory,
};

/// Flat delivery charge applied to a non-empty vendor basket.
pub const DEFAULT_DELIVERY_CHARGE: u32 = 40;

/// Tax rate in percent points.
pub const DEFAULT_TAX_PERCENT: u32 = 5;

/// Storefront pricing rules.
#[derive(Debug, Clone, Copy)]
pub struct PricingPolicy {
    currency: &'static Currency,
    delivery_charge: Price,
    tax_rate: Percentage,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(
            iso::INR,
            Price::new(DEFAULT_DELIVERY_CHARGE),
            Decimal::from(DEFAULT_TAX_PERCENT),
        )
    }
}

impl PricingPolicy {
    /// Create a policy; `tax_percent` is in percent points (5 means 5 %).
    pub fn new(currency: &'static Currency, delivery_charge: Price, tax_percent: Decimal) -> Self {
        Self {
            currency,
            delivery_charge,
            tax_rate: Percentage::from(tax_percent / Decimal::ONE_HUNDRED),
        }
    }

    /// Currency totals are displayed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Flat delivery charge.
    pub fn delivery_charge(&self) -> Price {
        self.delivery_charge
    }

    /// Tax on a subtotal, rounded to the nearest whole unit.
    pub fn tax_on(&self, subtotal: Price) -> Price {
        let rate = self.tax_rate * Decimal::ONE;

        Price::new(subtotal.amount().saturating_mul(rate)).round_whole()
    }

    /// Totals for one vendor basket with no discount.
    pub fn totals(&self, group: &CartGroup) -> TenantTotals {
        self.totals_with_discount(group, Price::ZERO)
    }

    /// Totals for one vendor basket after a discount.
    pub fn totals_with_discount(&self, group: &CartGroup, discount: Price) -> TenantTotals {
        let subtotal = group.subtotal();

        let delivery = if group.is_empty() {
            Price::ZERO
        } else {
            self.delivery_charge
        };

        let tax = self.tax_on(subtotal);

        TenantTotals {
            items_count: group.item_count(),
            subtotal,
            delivery,
            tax,
            discount,
            grand_total: subtotal + delivery + tax - discount,
        }
    }
}

/// Computed totals for one vendor basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantTotals {
    /// Sum of quantities.
    pub items_count: u32,

    /// Σ quantity × (base + toppings).
    pub subtotal: Price,

    /// Delivery charge, zero for an empty basket.
    pub delivery: Price,

    /// Tax on the subtotal.
    pub tax: Price,

    /// Coupon discount.
    pub discount: Price,

    /// subtotal + delivery + tax − discount.
    pub grand_total: Price,
}

impl TenantTotals {
    /// The grand total as money.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the total cannot be represented in the
    /// currency's minor units.
    pub fn grand_total_money(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, PriceError> {
        self.grand_total.to_money(currency)
    }
}

/// A vendor basket with its display name and totals.
#[derive(Debug, Clone)]
pub struct TenantSummary<'a> {
    /// The basket.
    pub group: &'a CartGroup,

    /// Resolved vendor name.
    pub tenant_name: &'a str,

    /// Computed totals.
    pub totals: TenantTotals,
}

impl<'a> TenantSummary<'a> {
    /// Summarise a basket.
    pub fn new(
        group: &'a CartGroup,
        directory: &'a TenantDirectory,
        policy: &PricingPolicy,
    ) -> Self {
        Self {
            group,
            tenant_name: directory.display_name(group),
            totals: policy.totals(group),
        }
    }
}
